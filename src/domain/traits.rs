//! # Domain Traits
//!
//! Abstract interface for the session that carries tool calls to the server.
//! Allows the dispatch loop to run against MCP or an in-memory stand-in.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::types::{ToolCall, ToolInfo, ToolReply};

/// Abstract interface for a request/response tool session (e.g., MCP over stdio)
#[async_trait]
pub trait ToolSession: Send + Sync {
    /// List the tools the server advertises
    async fn list_tools(&self) -> Result<Vec<ToolInfo>>;

    /// Invoke one tool and wait for its reply
    async fn call_tool(&self, call: &ToolCall) -> Result<ToolReply>;
}
