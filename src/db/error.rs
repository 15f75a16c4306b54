//! Storage-agnostic error types for the database layer.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    /// Entity not found by ID.
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(roster::db::not_found))]
    NotFound { entity_type: String, id: String },

    /// A unique constraint rejected the write.
    #[error("Unique constraint violation: {message}")]
    #[diagnostic(code(roster::db::unique_violation))]
    UniqueViolation { message: String },

    /// Generic database error.
    #[error("Database error: {message}")]
    #[diagnostic(code(roster::db::database))]
    Database { message: String },

    /// Migration error.
    #[error("Migration error: {message}")]
    #[diagnostic(code(roster::db::migration))]
    Migration { message: String },

    /// Connection error.
    #[error("Connection error: {message}")]
    #[diagnostic(code(roster::db::connection))]
    Connection { message: String },
}

/// Result type alias for database operations.
pub type DbResult<T> = Result<T, DbError>;
