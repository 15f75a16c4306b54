//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//!
//! Methods are declared as `impl Future + Send` so that futures built on
//! top of a generic `Database` (axum handlers, MCP tools) stay `Send`.

use std::future::Future;

use crate::db::{DbResult, models::Student};

/// Repository for Student operations.
pub trait StudentRepository {
    /// Insert a new student. The store assigns the id; `created_at` and
    /// `updated_at` are persisted as given. Returns the stored record.
    fn create(&self, student: &Student) -> impl Future<Output = DbResult<Student>> + Send;

    /// Get a student by ID.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Student>> + Send;

    /// Get all students.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Student>>> + Send;

    /// Get all students in a department (exact, case-sensitive match).
    fn list_by_department(
        &self,
        department: &str,
    ) -> impl Future<Output = DbResult<Vec<Student>>> + Send;

    /// Update an existing student by id. All columns except `id` and
    /// `created_at` are written.
    fn update(&self, student: &Student) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a student by ID.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<()>> + Send;

    /// Check whether a student with this id exists.
    fn exists(&self, id: i64) -> impl Future<Output = DbResult<bool>> + Send;

    /// Check whether any student uses this email.
    fn exists_by_email(&self, email: &str) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    /// Repository handle borrowed from the database.
    type Students<'a>: StudentRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the student repository.
    fn students(&self) -> Self::Students<'_>;
}
