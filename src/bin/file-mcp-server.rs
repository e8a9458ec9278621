// File tool MCP server
// Serves list_files and create_file on stdio for the file-agent client

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use file_agent::application::logging;
use file_agent::domain::config::{AppConfig, DEFAULT_CONFIG_PATH};
use file_agent::infrastructure::mcp::serve_stdio;
use file_agent::infrastructure::tools::FileTools;

#[derive(Debug, Parser)]
#[command(name = "file-mcp-server", about = "MCP server exposing file tools over stdio")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Working folder (overrides FOLDER_PATH)
    #[arg(long)]
    folder: Option<String>,

    /// Log level used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();
    let mut config = AppConfig::load(&args.config)?;
    config.apply_env(|key| std::env::var(key).ok());
    let mut config = config.with_folder(args.folder);
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    let _guard = logging::init(&config.logging)?;

    serve_stdio(FileTools::new(config.folder_path())).await
}
