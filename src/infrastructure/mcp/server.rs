//! # MCP Server
//!
//! Exposes [`FileTools`] as MCP tools using the rmcp `#[tool]` macros.
//! Tool failures are reported as `Error: ...` text inside a normal result so
//! they never surface as protocol faults.

use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::Deserialize;

use crate::infrastructure::tools::files::{self, FileTools, Listing};
use crate::strings::{logs, messages};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateFileRequest {
    #[schemars(description = "Name of the file, relative to the working folder")]
    pub filename: String,
    #[schemars(description = "Text written to the file verbatim")]
    pub content: String,
}

/// MCP handler serving the file tools over any rmcp transport.
#[derive(Clone)]
pub struct FileToolServer {
    tools: FileTools,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FileToolServer {
    pub fn new(tools: FileTools) -> Self {
        Self {
            tools,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "List all files in the current folder")]
    async fn list_files(&self) -> Result<CallToolResult, McpError> {
        let outcome = self.tools.list_files().await;
        let text = files::render(&outcome, Listing::render);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Create a new file in the current folder with the given content")]
    async fn create_file(
        &self,
        Parameters(CreateFileRequest { filename, content }): Parameters<CreateFileRequest>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.tools.create_file(&filename, &content).await;
        let text = files::render(&outcome, |_| messages::file_created(&filename));
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for FileToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(messages::SERVER_INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

/// Serve on stdin/stdout until the client disconnects.
pub async fn serve_stdio(tools: FileTools) -> anyhow::Result<()> {
    tracing::info!("{}", logs::SERVER_STARTING);
    match tools.folder() {
        Some(folder) => tracing::info!("{}", logs::working_folder(&folder.display().to_string())),
        None => tracing::warn!("{}", logs::FOLDER_MISSING_WARN),
    }

    let service = FileToolServer::new(tools)
        .serve(rmcp::transport::stdio())
        .await?;
    service.waiting().await?;

    tracing::info!("{}", logs::SERVER_STOPPED);
    Ok(())
}
