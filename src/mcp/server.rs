//! MCP server implementation
//!
//! This module implements the main MCP server coordinator that exposes
//! the student tool handlers over the MCP protocol.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::ToolCallContext,
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};

use crate::db::Database;

use super::tools::StudentTools;

/// Main MCP server coordinator
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic dispatch).
/// Tool listing and dispatch are delegated to the [`StudentTools`] router.
#[derive(Clone)]
pub struct McpServer<D: Database> {
    student_tools: StudentTools<D>,
}

impl<D: Database + 'static> McpServer<D> {
    /// Create a new MCP server with the given database
    ///
    /// # Arguments
    /// * `db` - Shared database instance implementing the Database trait
    ///
    /// # Returns
    /// A new McpServer instance with the student tool handlers initialized
    pub fn new(db: Arc<D>) -> Self {
        Self {
            student_tools: StudentTools::new(db),
        }
    }
}

impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "Roster MCP Server - Create, look up, list, update, and delete student records"
                .to_string(),
        );
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            meta: None,
            tools: self.student_tools.router().list_all(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let context = ToolCallContext::new(&self.student_tools, request, context);
        self.student_tools.router().call(context).await
    }
}
