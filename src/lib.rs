//! # file-agent
//!
//! A client that turns one free-text instruction into tool calls and a
//! server that executes them against a single working folder, joined by MCP
//! over stdio:
//! - Domain: Configuration and Types
//! - Infrastructure: MCP client/server, file tools
//! - Application: Parsing, Dispatch, Logging
//!

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod strings;
