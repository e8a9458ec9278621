//! # Domain Types
//!
//! Common data structures and enums used across the interpreter, the tool
//! server and the dispatch loop.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of tools the server exposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    ListFiles,
    CreateFile,
}

impl ToolName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::ListFiles => "list_files",
            ToolName::CreateFile => "create_file",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A planned tool invocation: which tool to call and with what arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolCall {
    pub tool: ToolName,
    pub arguments: BTreeMap<String, String>,
}

impl ToolCall {
    pub fn list_files() -> Self {
        Self {
            tool: ToolName::ListFiles,
            arguments: BTreeMap::new(),
        }
    }

    pub fn create_file(filename: impl Into<String>, content: impl Into<String>) -> Self {
        let mut arguments = BTreeMap::new();
        arguments.insert("filename".to_string(), filename.into());
        arguments.insert("content".to_string(), content.into());
        Self {
            tool: ToolName::CreateFile,
            arguments,
        }
    }

    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    /// Arguments as a JSON object, the shape MCP expects for `tools/call`.
    pub fn arguments_json(&self) -> serde_json::Map<String, serde_json::Value> {
        self.arguments
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect()
    }
}

/// Description of a tool as advertised by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub description: Option<String>,
}

/// Outcome of a single dispatched call, as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReply {
    /// Text of every content item returned by the tool.
    pub texts: Vec<String>,
    pub is_error: bool,
}
