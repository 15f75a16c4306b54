//! Student record handlers.

use axum::{
    Json,
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::state::AppState;
use crate::db::{Database, Student};
use crate::service::{StudentRequest, StudentService};

// =============================================================================
// DTOs
// =============================================================================

/// Request body for creating and updating students.
///
/// Every field is optional at the transport; the service decides which are
/// required per operation. On update, omitted fields (and blank strings)
/// leave the stored value unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    #[schema(example = "ada@example.edu")]
    pub email: Option<String>,
    /// Date of birth as YYYY-MM-DD
    #[schema(example = "2001-09-14")]
    pub date_of_birth: Option<NaiveDate>,
    #[schema(example = "Computer Science")]
    pub department: Option<String>,
    #[schema(example = 2023)]
    pub enrollment_year: Option<i32>,
}

impl From<StudentPayload> for StudentRequest {
    fn from(p: StudentPayload) -> Self {
        Self {
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            date_of_birth: p.date_of_birth,
            department: p.department,
            enrollment_year: p.enrollment_year,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.edu")]
    pub email: String,
    /// Date of birth as YYYY-MM-DD
    #[schema(example = "2001-09-14")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[schema(example = "Computer Science")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[schema(example = 2023)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
            date_of_birth: s.date_of_birth,
            department: s.department,
            enrollment_year: s.enrollment_year,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListStudentsQuery {
    /// Filter by department (exact match)
    #[param(example = "Computer Science")]
    pub department: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    post,
    path = "/api/v1/students",
    tag = "students",
    request_body = StudentPayload,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_student<D: Database>(
    State(state): State<AppState<D>>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<StudentPayload>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let service = StudentService::new(state.db().students());

    let student = service
        .create(payload.into())
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_student<D: Database>(
    State(state): State<AppState<D>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Json<StudentResponse>, ApiError> {
    let service = StudentService::new(state.db().students());

    let student = service
        .get(id)
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;

    Ok(Json(student.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/students",
    tag = "students",
    params(ListStudentsQuery),
    responses(
        (status = 200, description = "List of students", body = [StudentResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_students<D: Database>(
    State(state): State<AppState<D>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListStudentsQuery>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let service = StudentService::new(state.db().students());

    // A blank filter means "no filter", same as omitting it.
    let students = match query.department.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(department) => service.list_by_department(department).await,
        None => service.list_all().await,
    }
    .map_err(|e| ApiError::new(e, uri.path()))?;

    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_student<D: Database>(
    State(state): State<AppState<D>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<StudentResponse>, ApiError> {
    let service = StudentService::new(state.db().students());

    let student = service
        .update(id, payload.into())
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;

    Ok(Json(student.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_student<D: Database>(
    State(state): State<AppState<D>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let service = StudentService::new(state.db().students());

    service
        .delete(id)
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;

    Ok(StatusCode::NO_CONTENT)
}
