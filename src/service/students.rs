//! Student use-case service.

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::info;

use crate::db::{DbError, Student, StudentRepository};

/// Errors crossing the service boundary.
///
/// This is the complete taxonomy; adapters map these variants onto HTTP
/// statuses and tool error codes and never see raw storage errors with a
/// domain meaning.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A required field is missing or blank.
    #[error("{message}")]
    InvalidArgument { message: String },

    /// Another record already uses this email.
    #[error("Email already in use: {email}")]
    DuplicateEmail { email: String },

    /// No record with this id.
    #[error("Student not found with id: {id}")]
    NotFound { id: i64 },

    /// Persistence-layer failure with no domain meaning.
    #[error(transparent)]
    Repository(DbError),
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        Self::Repository(err)
    }
}

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Mutation request shared by create and update.
///
/// Every field is optional. Create validates that the required ones are
/// present and non-blank; update treats absent fields as "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct StudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub department: Option<String>,
    pub enrollment_year: Option<i32>,
}

/// Student use-case service, constructed with an explicit repository.
pub struct StudentService<R> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new student record.
    ///
    /// Requires `first_name`, `last_name`, and `email` to be present and
    /// non-blank. Both timestamps are set to the same instant; the store
    /// assigns the id.
    pub async fn create(&self, request: StudentRequest) -> ServiceResult<Student> {
        let first_name = required(request.first_name, "First name")?;
        let last_name = required(request.last_name, "Last name")?;
        let email = required(request.email, "Email")?;

        if self.repo.exists_by_email(&email).await? {
            return Err(ServiceError::DuplicateEmail { email });
        }

        let now = Utc::now();
        let student = Student {
            // id is assigned by the store on insert
            id: 0,
            first_name,
            last_name,
            email,
            date_of_birth: request.date_of_birth,
            department: request.department,
            enrollment_year: request.enrollment_year,
            created_at: now,
            updated_at: now,
        };

        let created = match self.repo.create(&student).await {
            // The unique index is the final arbiter when two creates race
            // past the exists check.
            Err(DbError::UniqueViolation { .. }) => {
                return Err(ServiceError::DuplicateEmail {
                    email: student.email,
                });
            }
            other => other?,
        };

        info!(id = created.id, "created student");
        Ok(created)
    }

    /// Fetch a single student by id.
    pub async fn get(&self, id: i64) -> ServiceResult<Student> {
        self.repo.get(id).await.map_err(|e| not_found(e, id))
    }

    /// Fetch every student record.
    pub async fn list_all(&self) -> ServiceResult<Vec<Student>> {
        Ok(self.repo.list().await?)
    }

    /// Fetch students in a department (exact match).
    ///
    /// Unknown departments yield an empty list, never an error.
    pub async fn list_by_department(&self, department: &str) -> ServiceResult<Vec<Student>> {
        Ok(self.repo.list_by_department(department).await?)
    }

    /// Apply a partial update to an existing student.
    ///
    /// String fields overwrite only when supplied non-blank; date and
    /// integer fields overwrite whenever supplied. `updated_at` is always
    /// refreshed on success, even when nothing else changed.
    pub async fn update(&self, id: i64, request: StudentRequest) -> ServiceResult<Student> {
        let mut student = self.repo.get(id).await.map_err(|e| not_found(e, id))?;

        // The duplicate check runs before any merge so a rejected request
        // leaves the record untouched.
        if let Some(email) = request.email.as_deref()
            && email != student.email
            && self.repo.exists_by_email(email).await?
        {
            return Err(ServiceError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        if let Some(first_name) = non_blank(request.first_name) {
            student.first_name = first_name;
        }
        if let Some(last_name) = non_blank(request.last_name) {
            student.last_name = last_name;
        }
        if let Some(email) = non_blank(request.email) {
            student.email = email;
        }
        if let Some(date_of_birth) = request.date_of_birth {
            student.date_of_birth = Some(date_of_birth);
        }
        if let Some(department) = non_blank(request.department) {
            student.department = Some(department);
        }
        if let Some(enrollment_year) = request.enrollment_year {
            student.enrollment_year = Some(enrollment_year);
        }

        student.updated_at = Utc::now();

        match self.repo.update(&student).await {
            Err(DbError::UniqueViolation { .. }) => {
                return Err(ServiceError::DuplicateEmail {
                    email: student.email,
                });
            }
            Err(e) => return Err(not_found(e, id)),
            Ok(()) => {}
        }

        info!(id, "updated student");
        Ok(student)
    }

    /// Delete a student by id.
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.repo.exists(id).await? {
            return Err(ServiceError::NotFound { id });
        }
        self.repo.delete(id).await.map_err(|e| not_found(e, id))?;

        info!(id, "deleted student");
        Ok(())
    }
}

fn required(value: Option<String>, field: &str) -> ServiceResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ServiceError::InvalidArgument {
            message: format!("{field} is required"),
        }),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn not_found(err: DbError, id: i64) -> ServiceError {
    match err {
        DbError::NotFound { .. } => ServiceError::NotFound { id },
        other => ServiceError::Repository(other),
    }
}
