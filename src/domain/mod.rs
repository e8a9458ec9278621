//! # Domain Layer
//!
//! Core definitions, types, and traits shared by the client and the tool server.
//! Independent of the MCP transport, serving as the contract for other layers.

pub mod config;
pub mod traits;
pub mod types;
