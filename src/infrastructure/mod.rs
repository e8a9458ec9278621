//! # Infrastructure Layer
//!
//! MCP transport and the filesystem tools behind it.

pub mod mcp;
pub mod tools;
