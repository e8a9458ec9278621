//! # MCP Client
//!
//! A [`ToolSession`] backed by an rmcp client. The usual entry point is
//! [`McpToolSession::spawn`], which starts the tool server as a child
//! process and talks to it over its stdin/stdout.

use anyhow::{Context, Result};
use async_trait::async_trait;
use rmcp::{
    RoleClient, ServiceExt,
    model::{CallToolRequestParam, CallToolResult},
    service::RunningService,
    transport::{ConfigureCommandExt, IntoTransport, TokioChildProcess},
};
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::domain::config::FOLDER_ENV;
use crate::domain::traits::ToolSession;
use crate::domain::types::{ToolCall, ToolInfo, ToolReply};
use crate::strings::logs;

/// MCP client session used by the dispatch loop
pub struct McpToolSession {
    service: RunningService<RoleClient, ()>,
}

impl McpToolSession {
    /// Complete the MCP handshake over an already established transport.
    pub async fn connect<T, E, A>(transport: T) -> Result<Self>
    where
        T: IntoTransport<RoleClient, E, A>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let service = ()
            .serve(transport)
            .await
            .context("MCP handshake with tool server failed")?;

        tracing::info!("{}", logs::CONNECTED);
        Ok(Self { service })
    }

    /// Spawn the tool server and connect to it over stdio.
    ///
    /// # Arguments
    /// * `command` - Path to the server binary
    /// * `args` - Extra arguments for the server
    /// * `folder` - Working folder handed to the server through `FOLDER_PATH`
    pub async fn spawn(command: &Path, args: &[String], folder: Option<&PathBuf>) -> Result<Self> {
        tracing::info!("{}", logs::spawning_server(&command.display().to_string()));

        let child = Command::new(command).configure(|cmd| {
            cmd.args(args);
            if let Some(folder) = folder {
                cmd.env(FOLDER_ENV, folder);
            }
        });
        let transport = TokioChildProcess::new(child)
            .with_context(|| format!("Failed to start tool server '{}'", command.display()))?;

        Self::connect(transport).await
    }

    /// Close the session; the child server exits when its stdin closes.
    pub async fn shutdown(self) {
        if let Err(e) = self.service.cancel().await {
            tracing::warn!("{}", logs::session_close_fail(&e.to_string()));
        }
    }
}

fn reply_from(result: CallToolResult) -> ToolReply {
    let texts = result
        .content
        .iter()
        .filter_map(|content| content.as_text().map(|t| t.text.clone()))
        .collect();
    ToolReply {
        texts,
        is_error: result.is_error.unwrap_or(false),
    }
}

#[async_trait]
impl ToolSession for McpToolSession {
    async fn list_tools(&self) -> Result<Vec<ToolInfo>> {
        let tools = self
            .service
            .list_all_tools()
            .await
            .context("Failed to list server tools")?;

        Ok(tools
            .into_iter()
            .map(|tool| ToolInfo {
                name: tool.name.to_string(),
                description: tool.description.map(|d| d.to_string()),
            })
            .collect())
    }

    async fn call_tool(&self, call: &ToolCall) -> Result<ToolReply> {
        let result = self
            .service
            .call_tool(CallToolRequestParam {
                name: call.tool.as_str().into(),
                arguments: Some(call.arguments_json()),
            })
            .await?;
        Ok(reply_from(result))
    }
}
