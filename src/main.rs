//! # Main Entry Point (client)
//!
//! Reads one instruction, spawns the file tool server, plans tool calls from
//! the instruction and dispatches them in order:
//! - Domain: Configuration
//! - Infrastructure: MCP client session
//! - Application: Parsing, Dispatch
//!

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use file_agent::application::dispatch::{dispatch, print_plan, print_tools};
use file_agent::application::logging;
use file_agent::application::parsing::Interpreter;
use file_agent::domain::config::{AppConfig, DEFAULT_CONFIG_PATH};
use file_agent::domain::traits::ToolSession;
use file_agent::infrastructure::mcp::McpToolSession;
use file_agent::strings::{logs, messages};

#[derive(Debug, Parser)]
#[command(name = "file-agent", about = "Turn an instruction into file tool calls over MCP")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Working folder for the tool server (overrides FOLDER_PATH)
    #[arg(long)]
    folder: Option<String>,

    /// Tool server binary to spawn
    #[arg(long)]
    server: Option<String>,

    /// Instruction to run instead of prompting on stdin
    #[arg(long, short)]
    instruction: Option<String>,

    /// Log level used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

fn read_instruction() -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", messages::INSTRUCTION_PROMPT)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read instruction from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    dotenvy::dotenv().ok();
    let mut config = AppConfig::load(&args.config)?;
    config.apply_env(|key| std::env::var(key).ok());
    let mut config = config.with_folder(args.folder);
    if let Some(server) = args.server {
        config.server.command = Some(server);
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    // 2. Logging Setup
    let _guard = logging::init(&config.logging)?;
    tracing::debug!("{}", logs::config_loaded(&args.config.display().to_string()));

    // 3. Instruction
    let instruction = match args.instruction {
        Some(text) => text,
        None => read_instruction()?,
    };

    // 4. Session
    let session = McpToolSession::spawn(
        &config.server_command(),
        &config.server.args,
        config.folder_path().as_ref(),
    )
    .await?;

    let mut stdout = io::stdout();
    let tools = session.list_tools().await?;
    print_tools(&mut stdout, &tools)?;
    writeln!(stdout, "{}", messages::user_request(&instruction))?;

    // 5. Plan and Dispatch
    let calls = Interpreter::default().interpret(&instruction);
    print_plan(&mut stdout, &calls)?;
    dispatch(&session, &calls, &mut stdout).await?;

    session.shutdown().await;
    Ok(())
}
