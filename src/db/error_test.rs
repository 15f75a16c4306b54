//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "student".to_string(),
        id: "42".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: student with id '42'");
}

#[test]
fn unique_violation_error_displays_correctly() {
    let err = DbError::UniqueViolation {
        message: "UNIQUE constraint failed: student.email".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Unique constraint violation: UNIQUE constraint failed: student.email"
    );
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "disk I/O error".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: disk I/O error");
}

#[test]
fn migration_error_displays_correctly() {
    let err = DbError::Migration {
        message: "failed to apply migration 0001".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Migration error: failed to apply migration 0001"
    );
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open database".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: unable to open database");
}

#[test]
fn db_result_err_returns_error() {
    let result: DbResult<i32> = Err(DbError::NotFound {
        entity_type: "student".to_string(),
        id: "7".to_string(),
    });
    assert!(result.is_err());
}
