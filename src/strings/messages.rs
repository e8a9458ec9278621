//! # Messages
//!
//! Contains constant strings and format functions for user-facing output.
//! Tool results returned over MCP are built here, as is the client's console text.

// Tool results
pub const NO_FILES_FOUND: &str = "No files found";
pub const FOLDER_NOT_CONFIGURED: &str = "Working folder is not configured (set FOLDER_PATH)";

pub fn files_in(folder: &str) -> String {
    format!("Files in {folder}:")
}

pub fn file_created(filename: &str) -> String {
    format!("File '{filename}' created successfully")
}

pub fn tool_error(err: &str) -> String {
    format!("Error: {err}")
}

// Client console
pub const INSTRUCTION_PROMPT: &str = "\nEnter your instruction: ";
pub const AVAILABLE_TOOLS: &str = "\nAvailable MCP tools:";
pub const PLANNED_ACTIONS: &str = "\nPlanned actions:";
pub const NO_RESULT: &str = "No result";

pub fn available_tool(name: &str, description: &str) -> String {
    format!("  - {name}: {description}")
}

pub fn user_request(input: &str) -> String {
    format!("\nUser request: {input}")
}

pub fn executing_tool(tool: &str) -> String {
    format!("\nExecuting tool: {tool}")
}

pub fn tool_arguments(arguments: &str) -> String {
    format!("Arguments: {arguments}")
}

pub fn tool_result(text: &str) -> String {
    format!("Result: {text}")
}

pub fn tool_call_error(err: &str) -> String {
    format!("Error executing tool: {err}")
}

// Server metadata
pub const SERVER_INSTRUCTIONS: &str =
    "File tools scoped to one working folder: list_files lists it, create_file writes a file into it.";
