//! MCP tool implementations

pub mod students;


pub use students::StudentTools;

use rmcp::ErrorData as McpError;
use serde_json::json;

use crate::service::ServiceError;

/// Map a service error to the matching MCP protocol error.
pub(crate) fn map_service_error(err: ServiceError) -> McpError {
    match &err {
        ServiceError::InvalidArgument { .. } => {
            McpError::invalid_params("invalid_argument", Some(json!({"error": err.to_string()})))
        }
        ServiceError::DuplicateEmail { .. } => {
            McpError::invalid_request("duplicate_email", Some(json!({"error": err.to_string()})))
        }
        ServiceError::NotFound { .. } => McpError::resource_not_found(
            "student_not_found",
            Some(json!({"error": err.to_string()})),
        ),
        ServiceError::Repository(_) => {
            McpError::internal_error("database_error", Some(json!({"error": err.to_string()})))
        }
    }
}
