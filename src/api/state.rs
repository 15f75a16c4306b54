//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database` so any storage backend can be plugged in.
/// Handlers construct a `StudentService` per request from the borrowed
/// repository; the state only owns the database.
pub struct AppState<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl: only the Arc needs to be cloneable, not D itself.
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState with the given database.
    pub fn new(db: D) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get a cloned Arc to the database.
    ///
    /// Useful for handing the database to the MCP service.
    pub fn db_arc(&self) -> Arc<D> {
        Arc::clone(&self.db)
    }
}
