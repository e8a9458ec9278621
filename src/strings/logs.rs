pub const SERVER_STARTING: &str = "Starting file MCP server...";
pub const SERVER_STOPPED: &str = "File MCP server stopped.";
pub const FOLDER_MISSING_WARN: &str = "No working folder configured; tools will fail until FOLDER_PATH is set";

pub fn working_folder(folder: &str) -> String {
    format!("Working folder: {folder}")
}

pub fn listed_files(count: usize) -> String {
    format!("Listed {count} files")
}

pub fn list_files_failed(err: &str) -> String {
    format!("Error listing files: {err}")
}

pub fn created_file(filename: &str) -> String {
    format!("Created file: {filename}")
}

pub fn create_file_failed(err: &str) -> String {
    format!("Error creating file: {err}")
}

pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub fn spawning_server(command: &str) -> String {
    format!("Spawning tool server: {command}")
}

pub const CONNECTED: &str = "Connected to MCP tool server";

pub fn tool_call_failed(tool: &str, err: &str) -> String {
    format!("Tool call '{tool}' failed: {err}")
}

pub fn dispatch_finished(completed: usize, failed: usize) -> String {
    format!("Dispatch finished: {completed} completed, {failed} failed")
}

pub fn session_close_fail(err: &str) -> String {
    format!("Unable to close MCP session cleanly: {err}")
}
