//! User account service
//!
//! Signup, login, daily-entry bookkeeping, and profile patching on top of
//! the file-backed store. The update discipline is read-modify-write on
//! the whole user record; concurrent submissions for one user are
//! last-writer-wins (inherited limitation, documented in DESIGN.md).

use crate::error::ApiError;
use crate::services::goals::GoalService;
use crate::store::UserStore;
use chrono::Utc;
use health_companion_shared::models::{Credentials, DailyEntry, User, UserProfile};
use health_companion_shared::progress::{current_streak, last_entry_date};
use health_companion_shared::summary::DailySummary;
use health_companion_shared::types::{DailyLogRequest, ProfilePatch, ProgressResponse};
use tracing::info;
use uuid::Uuid;

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Create a user with a freshly generated goal.
    ///
    /// Email uniqueness is expected but not enforced; lookups by email
    /// settle duplicates by taking the first stored match.
    pub async fn signup(
        store: &UserStore,
        email: String,
        password: String,
        profile: UserProfile,
    ) -> Result<User, ApiError> {
        if email.trim().is_empty() {
            return Err(ApiError::Validation("Email must not be empty".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            credentials: Credentials {
                email,
                // Stored as-is; hashing is explicitly out of scope
                password,
                created_at: now,
            },
            goal: GoalService::generate_goal(&profile),
            profile,
            progress: Default::default(),
            created_at: now,
            updated_at: now,
        };

        store
            .insert(user.clone())
            .await
            .map_err(ApiError::Storage)?;
        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Authenticate with email and password.
    ///
    /// Plaintext comparison, preserved as a known defect.
    pub async fn authenticate(
        store: &UserStore,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        match store.find_by_email(email).await {
            Some(user) if user.credentials.password == password => Ok(user),
            _ => Err(ApiError::Unauthorized(
                "Invalid email or password".to_string(),
            )),
        }
    }

    /// Fetch a user by id, mapping absence to the NotFound outcome.
    pub async fn get_user(store: &UserStore, user_id: Uuid) -> Result<User, ApiError> {
        store
            .get(user_id)
            .await
            .ok_or_else(|| ApiError::NotFound(format!("User {user_id} not found")))
    }

    /// Append a daily entry and recompute the derived progress fields.
    ///
    /// Entries are append-only; `total_entries`, `current_streak`, and
    /// `last_entry_date` are recomputed from the entry list rather than
    /// incremented, so they cannot drift.
    pub async fn add_daily_entry(
        store: &UserStore,
        user_id: Uuid,
        request: &DailyLogRequest,
        summary: Option<DailySummary>,
    ) -> Result<User, ApiError> {
        let mut user = Self::get_user(store, user_id).await?;

        let today = Utc::now().date_naive();
        let entry = DailyEntry {
            date: request.date.unwrap_or(today),
            meals: request.meals.clone(),
            exercises: request.exercises.clone(),
            lifestyle: request.lifestyle.clone(),
            summary,
            created_at: Utc::now(),
        };

        user.progress.entries.push(entry);
        user.progress.total_entries = user.progress.entries.len();
        user.progress.current_streak = current_streak(&user.progress.entries, today);
        user.progress.last_entry_date = last_entry_date(&user.progress.entries);
        user.updated_at = Utc::now();

        let saved = store
            .save(user.clone())
            .await
            .map_err(ApiError::Storage)?;
        if !saved {
            return Err(ApiError::NotFound(format!("User {user_id} not found")));
        }

        info!(
            user_id = %user.id,
            streak = user.progress.current_streak,
            entries = user.progress.total_entries,
            "Daily entry recorded"
        );
        Ok(user)
    }

    /// Progress summary for a user.
    pub async fn progress_summary(
        store: &UserStore,
        user_id: Uuid,
    ) -> Result<ProgressResponse, ApiError> {
        let user = Self::get_user(store, user_id).await?;
        Ok(ProgressResponse {
            total_entries: user.progress.total_entries,
            current_streak: user.progress.current_streak,
            last_entry_date: user.progress.last_entry_date,
            goal: user.goal,
        })
    }

    /// Most recent entries, date-descending.
    pub async fn recent_entries(
        store: &UserStore,
        user_id: Uuid,
        days: usize,
    ) -> Result<Vec<DailyEntry>, ApiError> {
        let user = Self::get_user(store, user_id).await?;
        let mut entries = user.progress.entries;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.truncate(days);
        Ok(entries)
    }

    /// Apply a profile patch and regenerate the goal.
    ///
    /// Every patchable field is enumerated on [`ProfilePatch`]; absent
    /// fields are left untouched. An empty patch is rejected rather than
    /// silently regenerating the goal. The goal is regenerated from the
    /// updated profile, replacing the previous one.
    pub async fn update_profile(
        store: &UserStore,
        user_id: Uuid,
        patch: ProfilePatch,
    ) -> Result<User, ApiError> {
        if patch.is_empty() {
            return Err(ApiError::Validation(
                "Profile update must change at least one field".to_string(),
            ));
        }

        let mut user = Self::get_user(store, user_id).await?;

        if let Some(email) = patch.email {
            user.credentials.email = email;
        }
        if let Some(name) = patch.name {
            user.profile.name = name;
        }
        if let Some(age) = patch.age {
            user.profile.age = age;
        }
        if let Some(gender) = patch.gender {
            user.profile.gender = gender;
        }
        if let Some(weight_kg) = patch.weight_kg {
            user.profile.weight_kg = weight_kg;
        }
        if let Some(height_cm) = patch.height_cm {
            user.profile.height_cm = height_cm;
        }
        if let Some(activity_level) = patch.activity_level {
            user.profile.activity_level = activity_level;
        }
        if let Some(medical_conditions) = patch.medical_conditions {
            user.profile.medical_conditions = medical_conditions;
        }
        if let Some(dietary_restrictions) = patch.dietary_restrictions {
            user.profile.dietary_restrictions = dietary_restrictions;
        }
        if let Some(primary_health_goal) = patch.primary_health_goal {
            user.profile.primary_health_goal = primary_health_goal;
        }
        if let Some(motivation) = patch.motivation {
            user.profile.motivation = Some(motivation);
        }

        user.goal = GoalService::generate_goal(&user.profile);
        user.updated_at = Utc::now();

        let saved = store
            .save(user.clone())
            .await
            .map_err(ApiError::Storage)?;
        if !saved {
            return Err(ApiError::NotFound(format!("User {user_id} not found")));
        }

        info!(user_id = %user.id, "Profile updated, goal regenerated");
        Ok(user)
    }
}
