//! # Configuration
//!
//! Manages the loading and parsing of the optional configuration file (`config.yaml`).
//! Values are layered: defaults, then the file, then the environment, then CLI flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the configuration file, relative to the process CWD.
pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

/// Environment variable naming the working folder.
pub const FOLDER_ENV: &str = "FOLDER_PATH";

/// Name of the server binary the client spawns.
pub const SERVER_BIN: &str = "file-mcp-server";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The single folder all tool file operations are scoped to.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub folder: Option<String>,
}

/// How the client launches the tool server.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; logs always go to stderr as well.
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Parse a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse config YAML")
    }

    /// Load from `path`. A missing file yields defaults; a broken one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Apply environment overrides. Takes a lookup so tests need not touch the
    /// real process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(folder) = lookup(FOLDER_ENV).filter(|f| !f.trim().is_empty()) {
            self.workspace.folder = Some(folder);
        }
    }

    pub fn with_folder(mut self, folder: Option<String>) -> Self {
        if folder.is_some() {
            self.workspace.folder = folder;
        }
        self
    }

    pub fn folder_path(&self) -> Option<PathBuf> {
        self.workspace.folder.as_ref().map(PathBuf::from)
    }

    /// Command used to start the server: configured, else the binary next to
    /// the current executable, else whatever `PATH` resolves.
    pub fn server_command(&self) -> PathBuf {
        if let Some(cmd) = &self.server.command {
            return PathBuf::from(cmd);
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(SERVER_BIN)))
            .filter(|candidate| candidate.exists())
            .unwrap_or_else(|| PathBuf::from(SERVER_BIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.workspace.folder, None);
        assert_eq!(config.logging.level, "info");
        assert!(config.server.args.is_empty());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
workspace:
  folder: /tmp/work
server:
  command: ./target/debug/file-mcp-server
  args: ["--log-level", "debug"]
logging:
  file: data/agent.log
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.workspace.folder.as_deref(), Some("/tmp/work"));
        assert_eq!(
            config.server_command(),
            PathBuf::from("./target/debug/file-mcp-server")
        );
        assert_eq!(config.server.args, vec!["--log-level", "debug"]);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file.as_deref(), Some("data/agent.log"));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(AppConfig::from_yaml("workspace: [unclosed").is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load(&temp_dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "workspace:\n  folder: here\n").unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.folder_path(), Some(PathBuf::from("here")));
    }

    #[test]
    fn test_layering() {
        let mut config = AppConfig::from_yaml("workspace:\n  folder: from-file\n").unwrap();

        config.apply_env(|key| (key == FOLDER_ENV).then(|| "from-env".to_string()));
        assert_eq!(config.workspace.folder.as_deref(), Some("from-env"));

        // Blank env values do not clobber the file
        let mut blank = AppConfig::from_yaml("workspace:\n  folder: from-file\n").unwrap();
        blank.apply_env(|_| Some("  ".to_string()));
        assert_eq!(blank.workspace.folder.as_deref(), Some("from-file"));

        let config = config.with_folder(Some("from-cli".to_string()));
        assert_eq!(config.workspace.folder.as_deref(), Some("from-cli"));

        let config = config.with_folder(None);
        assert_eq!(config.workspace.folder.as_deref(), Some("from-cli"));
    }
}
