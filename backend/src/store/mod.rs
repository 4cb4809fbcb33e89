//! File-backed user store
//!
//! Persists the full user record set as one JSON document, the way the
//! system this replaces kept its `users.json`. The store is an explicitly
//! constructed handle with an `open`/`close` lifecycle; nothing here is
//! process-global.
//!
//! Every mutation rewrites the whole file. Writes are serialized behind a
//! single lock, but callers doing read-modify-write on one user are still
//! last-writer-wins under concurrency; that limitation is inherited and
//! deliberately not strengthened.

use anyhow::{Context, Result};
use health_companion_shared::models::User;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Store file name inside the data directory
const STORE_FILE: &str = "users.json";

/// Handle to the user store.
///
/// Cheap to clone; all clones share the same in-memory state and file.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: PathBuf,
    /// Users in insertion order. Secondary lookups (email) take the first
    /// match in this order, which makes duplicate-email input predictable.
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Open the store, creating the data directory and loading any
    /// existing records.
    pub async fn open(data_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .with_context(|| format!("creating data directory {}", data_dir.display()))?;

        let path = data_dir.join(STORE_FILE);
        let users: Vec<User> = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing user store {}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("reading user store {}", path.display()))
            }
        };

        info!(path = %path.display(), users = users.len(), "User store opened");

        Ok(Self {
            inner: Arc::new(StoreInner {
                path,
                users: RwLock::new(users),
            }),
        })
    }

    /// Flush the store to disk and release the handle's claim on it.
    ///
    /// Mutations already persist eagerly; this exists so shutdown has a
    /// deterministic final write.
    pub async fn close(&self) -> Result<()> {
        let users = self.inner.users.read().await;
        self.persist(&users).await?;
        info!(path = %self.inner.path.display(), "User store closed");
        Ok(())
    }

    /// Insert a new user record.
    pub async fn insert(&self, user: User) -> Result<()> {
        let mut users = self.inner.users.write().await;
        users.push(user);
        self.persist(&users).await
    }

    /// Fetch a user by id.
    pub async fn get(&self, id: Uuid) -> Option<User> {
        let users = self.inner.users.read().await;
        users.iter().find(|user| user.id == id).cloned()
    }

    /// Fetch a user by email.
    ///
    /// Uniqueness is expected but not enforced; with duplicates, the first
    /// stored match is authoritative.
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.inner.users.read().await;
        users
            .iter()
            .find(|user| user.credentials.email == email)
            .cloned()
    }

    /// Replace a stored user record wholesale.
    ///
    /// Returns false when no record with the user's id exists.
    pub async fn save(&self, user: User) -> Result<bool> {
        let mut users = self.inner.users.write().await;
        match users.iter_mut().find(|stored| stored.id == user.id) {
            Some(stored) => {
                *stored = user;
                self.persist(&users).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.inner.users.read().await.len()
    }

    /// Whether the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Write the whole record set to disk (temp file + rename).
    async fn persist(&self, users: &[User]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(users).context("serializing user store")?;
        let tmp_path = self.inner.path.with_extension("json.tmp");

        tokio::fs::write(&tmp_path, &bytes)
            .await
            .with_context(|| format!("writing user store {}", tmp_path.display()))?;
        tokio::fs::rename(&tmp_path, &self.inner.path)
            .await
            .with_context(|| format!("replacing user store {}", self.inner.path.display()))?;

        debug!(users = users.len(), "User store persisted");
        Ok(())
    }
}
