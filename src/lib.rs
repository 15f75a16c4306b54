pub mod api;
pub mod db;
pub mod mcp;
pub mod paths;
pub mod service;
