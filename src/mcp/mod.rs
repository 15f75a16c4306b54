//! Model Context Protocol (MCP) server implementation
//!
//! This module provides an MCP server using the Streamable HTTP transport.
//! The server exposes tools for managing student records, mirroring the
//! REST API operations.
//!
//! # Architecture
//!
//! - **server**: Main MCP server coordinator
//! - **tools**: Tool handlers, generic over `D: Database` (no dynamic dispatch)
//!   - StudentTools: Create, look up, list, update, and delete students

pub mod server;
mod service;
pub mod tools;


pub use server::McpServer;
pub use service::create_mcp_service;
