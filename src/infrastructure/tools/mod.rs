pub mod files;

pub use files::{FileTools, Listing, ToolError, ToolErrorKind};
