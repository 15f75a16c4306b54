//! SQLite StudentRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::{DbError, DbResult, Student, StudentRepository};

/// SQLx-backed student repository.
pub struct SqliteStudentRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn student_from_row(row: &SqliteRow) -> Student {
    Student {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        date_of_birth: row.get("date_of_birth"),
        department: row.get("department"),
        enrollment_year: row.get("enrollment_year"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Distinguish unique-index rejections (the email index) from other
/// database failures.
fn map_sqlx_error(err: sqlx::Error) -> DbError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DbError::UniqueViolation {
                message: db_err.message().to_string(),
            }
        }
        _ => DbError::Database {
            message: err.to_string(),
        },
    }
}

impl<'a> StudentRepository for SqliteStudentRepository<'a> {
    async fn create(&self, student: &Student) -> DbResult<Student> {
        let result = sqlx::query(
            "INSERT INTO student (first_name, last_name, email, date_of_birth, department, \
             enrollment_year, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(student.date_of_birth)
        .bind(&student.department)
        .bind(student.enrollment_year)
        .bind(student.created_at)
        .bind(student.updated_at)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Student {
            id: result.last_insert_rowid(),
            ..student.clone()
        })
    }

    async fn get(&self, id: i64) -> DbResult<Student> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, email, date_of_birth, department, \
             enrollment_year, created_at, updated_at FROM student WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        let row = row.ok_or(DbError::NotFound {
            entity_type: "Student".to_string(),
            id: id.to_string(),
        })?;

        Ok(student_from_row(&row))
    }

    async fn list(&self) -> DbResult<Vec<Student>> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, email, date_of_birth, department, \
             enrollment_year, created_at, updated_at FROM student ORDER BY id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(rows.iter().map(student_from_row).collect())
    }

    async fn list_by_department(&self, department: &str) -> DbResult<Vec<Student>> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, email, date_of_birth, department, \
             enrollment_year, created_at, updated_at FROM student WHERE department = ? \
             ORDER BY id",
        )
        .bind(department)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(rows.iter().map(student_from_row).collect())
    }

    async fn update(&self, student: &Student) -> DbResult<()> {
        let result = sqlx::query(
            "UPDATE student SET first_name = ?, last_name = ?, email = ?, date_of_birth = ?, \
             department = ?, enrollment_year = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(student.date_of_birth)
        .bind(&student.department)
        .bind(student.enrollment_year)
        .bind(student.updated_at)
        .bind(student.id)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Student".to_string(),
                id: student.id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM student WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Student".to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }

    async fn exists(&self, id: i64) -> DbResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM student WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM student WHERE email = ?)")
                .bind(email)
                .fetch_one(self.pool)
                .await
                .map_err(|e| DbError::Database {
                    message: e.to_string(),
                })?;

        Ok(exists)
    }
}
