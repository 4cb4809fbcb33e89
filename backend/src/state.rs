//! Application state management
//!
//! Shared state handed to request handlers through Axum's state
//! extraction. Everything here is cheap to clone: the store handle is
//! Arc-backed, the enhancer and config are behind Arcs.

use crate::config::AppConfig;
use crate::services::enhancer::{HttpEnhancer, SummaryEnhancer};
use crate::store::UserStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// File-backed user store
    pub store: UserStore,
    /// Summary enhancer, behind the trait so tests can script outcomes
    pub enhancer: Arc<dyn SummaryEnhancer>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create application state with the HTTP enhancer from config.
    pub fn new(store: UserStore, config: AppConfig) -> Self {
        let enhancer = Arc::new(HttpEnhancer::new(config.enhancer.clone()));
        Self {
            store,
            enhancer,
            config: Arc::new(config),
        }
    }
}
