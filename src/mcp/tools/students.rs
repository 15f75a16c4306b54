//! MCP tools for Student management.

use chrono::NaiveDate;
use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::db::Database;
use crate::mcp::tools::map_service_error;
use crate::service::{StudentRequest, StudentService};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentParams {
    #[schemars(description = "Student's first name")]
    pub first_name: String,
    #[schemars(description = "Student's last name")]
    pub last_name: String,
    #[schemars(description = "Student's email address. Must be unique.")]
    pub email: String,
    #[schemars(description = "Student's date of birth in YYYY-MM-DD format. Optional.")]
    pub date_of_birth: Option<String>,
    #[schemars(description = "Department the student belongs to. Optional.")]
    pub department: Option<String>,
    #[schemars(description = "Year the student enrolled. Optional.")]
    pub enrollment_year: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetStudentParams {
    #[schemars(description = "The student's unique ID")]
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetStudentsByDepartmentParams {
    #[schemars(description = "The department name to filter by (exact match)")]
    pub department: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentParams {
    #[schemars(description = "The student's unique ID")]
    pub id: i64,
    #[schemars(description = "New first name (optional)")]
    pub first_name: Option<String>,
    #[schemars(description = "New last name (optional)")]
    pub last_name: Option<String>,
    #[schemars(description = "New email address (optional). Must stay unique.")]
    pub email: Option<String>,
    #[schemars(description = "New date of birth in YYYY-MM-DD format (optional)")]
    pub date_of_birth: Option<String>,
    #[schemars(description = "New department (optional)")]
    pub department: Option<String>,
    #[schemars(description = "New enrollment year (optional)")]
    pub enrollment_year: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteStudentParams {
    #[schemars(description = "The student's unique ID")]
    pub id: i64,
}

/// Parse a `YYYY-MM-DD` date parameter before it reaches the service layer.
fn parse_date(value: &str) -> Result<NaiveDate, McpError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        McpError::invalid_params(
            "invalid_date",
            Some(json!({
                "error": format!("invalid date '{value}', expected YYYY-MM-DD: {e}")
            })),
        )
    })
}

// =============================================================================
// Student Tools
// =============================================================================

#[derive(Clone)]
pub struct StudentTools<D: Database> {
    db: Arc<D>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl<D: Database + 'static> StudentTools<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self {
            db,
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool router for this handler
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(
        description = "Create a new student record with the given details. First name, last name, and a unique email are required."
    )]
    pub async fn create_student(
        &self,
        params: Parameters<CreateStudentParams>,
    ) -> Result<CallToolResult, McpError> {
        let date_of_birth = match &params.0.date_of_birth {
            Some(value) => Some(parse_date(value)?),
            None => None,
        };

        let request = StudentRequest {
            first_name: Some(params.0.first_name.clone()),
            last_name: Some(params.0.last_name.clone()),
            email: Some(params.0.email.clone()),
            date_of_birth,
            department: params.0.department.clone(),
            enrollment_year: params.0.enrollment_year,
        };

        let service = StudentService::new(self.db.students());
        let created = service.create(request).await.map_err(map_service_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&created).unwrap(),
        )]))
    }

    #[tool(description = "Get a student by their ID")]
    pub async fn get_student(
        &self,
        params: Parameters<GetStudentParams>,
    ) -> Result<CallToolResult, McpError> {
        let service = StudentService::new(self.db.students());
        let student = service.get(params.0.id).await.map_err(map_service_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&student).unwrap(),
        )]))
    }

    #[tool(description = "Get a list of all students")]
    pub async fn get_all_students(&self) -> Result<CallToolResult, McpError> {
        let service = StudentService::new(self.db.students());
        let students = service.list_all().await.map_err(map_service_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&students).unwrap(),
        )]))
    }

    #[tool(description = "Get all students in a specific department (exact name match)")]
    pub async fn get_students_by_department(
        &self,
        params: Parameters<GetStudentsByDepartmentParams>,
    ) -> Result<CallToolResult, McpError> {
        let service = StudentService::new(self.db.students());
        let students = service
            .list_by_department(&params.0.department)
            .await
            .map_err(map_service_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&students).unwrap(),
        )]))
    }

    #[tool(
        description = "Update an existing student's details. Only provided fields will be updated; omitted fields keep their current values."
    )]
    pub async fn update_student(
        &self,
        params: Parameters<UpdateStudentParams>,
    ) -> Result<CallToolResult, McpError> {
        let date_of_birth = match &params.0.date_of_birth {
            Some(value) => Some(parse_date(value)?),
            None => None,
        };

        let request = StudentRequest {
            first_name: params.0.first_name.clone(),
            last_name: params.0.last_name.clone(),
            email: params.0.email.clone(),
            date_of_birth,
            department: params.0.department.clone(),
            enrollment_year: params.0.enrollment_year,
        };

        let service = StudentService::new(self.db.students());
        let updated = service
            .update(params.0.id, request)
            .await
            .map_err(map_service_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&updated).unwrap(),
        )]))
    }

    #[tool(description = "Delete a student by their ID")]
    pub async fn delete_student(
        &self,
        params: Parameters<DeleteStudentParams>,
    ) -> Result<CallToolResult, McpError> {
        let service = StudentService::new(self.db.students());
        service
            .delete(params.0.id)
            .await
            .map_err(map_service_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Student with id {} has been deleted successfully.",
            params.0.id
        ))]))
    }
}
