//! API handlers for the Web API.

pub mod replies;
pub mod threads;

use std::sync::Arc;

use crate::db::Database;

/// State shared across all handlers.
pub struct AppState {
    /// Database handle.
    pub db: Arc<Database>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}
