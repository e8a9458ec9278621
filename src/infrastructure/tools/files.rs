//! # File Tools
//!
//! The two filesystem operations the server exposes, scoped to one working
//! folder injected at construction. Outcomes are tagged results; they become
//! plain strings only when rendered for the protocol.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::strings::{logs, messages};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    /// No working folder was configured.
    Unconfigured,
    NotFound,
    PermissionDenied,
    Io,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
}

impl ToolError {
    fn unconfigured() -> Self {
        Self {
            kind: ToolErrorKind::Unconfigured,
            message: messages::FOLDER_NOT_CONFIGURED.to_string(),
        }
    }

    fn io(err: &io::Error, path: &Path) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => ToolErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ToolErrorKind::PermissionDenied,
            _ => ToolErrorKind::Io,
        };
        Self {
            kind,
            message: format!("{err}: '{}'", path.display()),
        }
    }
}

/// Successful listing of the working folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub folder: PathBuf,
    pub entries: Vec<String>,
}

impl Listing {
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return messages::NO_FILES_FOUND.to_string();
        }
        let lines: Vec<String> = self.entries.iter().map(|e| format!("  - {e}")).collect();
        format!(
            "{}\n{}",
            messages::files_in(&self.folder.display().to_string()),
            lines.join("\n")
        )
    }
}

/// Render a tool outcome for the protocol boundary.
pub fn render<T, F>(outcome: &Result<T, ToolError>, ok: F) -> String
where
    F: FnOnce(&T) -> String,
{
    match outcome {
        Ok(value) => ok(value),
        Err(err) => messages::tool_error(&err.message),
    }
}

/// Filesystem tools bound to a single working folder.
#[derive(Debug, Clone)]
pub struct FileTools {
    folder: Option<PathBuf>,
}

impl FileTools {
    pub fn new(folder: Option<PathBuf>) -> Self {
        Self { folder }
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    fn root(&self) -> Result<&Path, ToolError> {
        self.folder.as_deref().ok_or_else(ToolError::unconfigured)
    }

    /// Non-recursive listing of the working folder, hidden entries included.
    pub async fn list_files(&self) -> Result<Listing, ToolError> {
        let result = self.read_entries().await;
        match &result {
            Ok(listing) => tracing::info!("{}", logs::listed_files(listing.entries.len())),
            Err(e) => tracing::error!("{}", logs::list_files_failed(&e.message)),
        }
        result
    }

    async fn read_entries(&self) -> Result<Listing, ToolError> {
        let root = self.root()?;
        let mut dir = tokio::fs::read_dir(root)
            .await
            .map_err(|e| ToolError::io(&e, root))?;

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| ToolError::io(&e, root))? {
            entries.push(entry.file_name().to_string_lossy().to_string());
        }
        entries.sort();

        Ok(Listing {
            folder: root.to_path_buf(),
            entries,
        })
    }

    /// Create or truncate `filename` under the working folder and write
    /// `content` verbatim. The filename is joined as given; `..` and absolute
    /// paths are not rejected.
    pub async fn create_file(&self, filename: &str, content: &str) -> Result<PathBuf, ToolError> {
        let result = self.write_file(filename, content).await;
        match &result {
            Ok(_) => tracing::info!("{}", logs::created_file(filename)),
            Err(e) => tracing::error!("{}", logs::create_file_failed(&e.message)),
        }
        result
    }

    async fn write_file(&self, filename: &str, content: &str) -> Result<PathBuf, ToolError> {
        let path = self.root()?.join(filename);
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| ToolError::io(&e, &path))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tools(dir: &TempDir) -> FileTools {
        FileTools::new(Some(dir.path().to_path_buf()))
    }

    #[tokio::test]
    async fn test_empty_folder() {
        let temp_dir = TempDir::new().unwrap();
        let listing = tools(&temp_dir).list_files().await.unwrap();
        assert!(listing.entries.is_empty());
        assert_eq!(listing.render(), "No files found");
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let temp_dir = TempDir::new().unwrap();
        let tools = tools(&temp_dir);

        let path = tools.create_file("notes.txt", "hello world").await.unwrap();
        assert_eq!(path, temp_dir.path().join("notes.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello world");

        let listing = tools.list_files().await.unwrap();
        assert_eq!(listing.entries, vec!["notes.txt"]);
        assert_eq!(
            listing.render(),
            format!("Files in {}:\n  - notes.txt", temp_dir.path().display())
        );
    }

    #[tokio::test]
    async fn test_listing_includes_dirs_and_hidden_but_not_nested() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();
        std::fs::write(temp_dir.path().join("sub/inner.txt"), "x").unwrap();
        std::fs::write(temp_dir.path().join(".hidden"), "").unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "").unwrap();

        let listing = tools(&temp_dir).list_files().await.unwrap();
        assert_eq!(listing.entries, vec![".hidden", "b.txt", "sub"]);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let temp_dir = TempDir::new().unwrap();
        let tools = tools(&temp_dir);
        tools.create_file("a.txt", "first version").await.unwrap();
        tools.create_file("a.txt", "second").await.unwrap();
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(),
            "second"
        );
    }

    #[tokio::test]
    async fn test_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = tools(&temp_dir).create_file("empty", "").await.unwrap();
        assert_eq!(std::fs::read(path).unwrap(), Vec::<u8>::new());
    }

    #[tokio::test]
    async fn test_missing_folder_is_error_string() {
        let temp_dir = TempDir::new().unwrap();
        let tools = FileTools::new(Some(temp_dir.path().join("missing")));

        let outcome = tools.list_files().await;
        let err = outcome.as_ref().unwrap_err();
        assert_eq!(err.kind, ToolErrorKind::NotFound);
        assert!(render(&outcome, Listing::render).starts_with("Error: "));

        let outcome = tools.create_file("x.txt", "x").await;
        assert_eq!(outcome.as_ref().unwrap_err().kind, ToolErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_missing_parent_dir_in_filename() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = tools(&temp_dir).create_file("no/such/dir.txt", "x").await;
        assert_eq!(outcome.unwrap_err().kind, ToolErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_unconfigured_folder() {
        let tools = FileTools::new(None);
        let outcome = tools.list_files().await;
        assert_eq!(outcome.as_ref().unwrap_err().kind, ToolErrorKind::Unconfigured);
        assert_eq!(
            render(&outcome, Listing::render),
            "Error: Working folder is not configured (set FOLDER_PATH)"
        );
        assert!(tools.create_file("a", "b").await.is_err());
    }
}
