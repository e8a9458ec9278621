//! # MCP Module
//!
//! Model Context Protocol plumbing built on rmcp.
//! The server exposes the file tools; the client carries planned calls to it.

pub mod client;
pub mod server;

pub use client::McpToolSession;
pub use server::{FileToolServer, serve_stdio};
