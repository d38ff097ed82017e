//! Error types for blogr

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the blogr application
#[derive(Debug, Error)]
pub enum BlogrError {
    #[error("Not a blogr directory: {0}")]
    NotBlogrDirectory(PathBuf),

    #[error("Invalid post id: {0}")]
    InvalidPostId(String),

    #[error("Post not found: {0}")]
    PostNotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BlogrError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogrError::NotBlogrDirectory(_) => 2,
            BlogrError::InvalidPostId(_) => 3,
            BlogrError::PostNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlogrError::NotBlogrDirectory(path) => {
                format!(
                    "Not a blogr directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'blogr init' in this directory to create a new blog\n\
                    • Navigate to an existing blogr directory\n\
                    • Set BLOGR_ROOT environment variable to your blog path",
                    path.display()
                )
            }
            BlogrError::InvalidPostId(raw) => {
                format!(
                    "Invalid post id: '{}'\n\n\
                    Post ids are the integers shown in the first column of 'blogr list'.\n\
                    Example: blogr show 1737115200000",
                    raw
                )
            }
            BlogrError::PostNotFound(id) => {
                format!(
                    "Post not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'blogr list' to see existing posts and their ids\n\
                    • The post may have been deleted",
                    id
                )
            }
            BlogrError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: blogr config editor 'vim'\n\
                    • Pass the body directly: blogr new <title> --content '...'",
                    msg
                )
            }
            BlogrError::Storage(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check free disk space and permissions on the .blogr directory\n\
                    • The change was not written; re-run the command once fixed",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlogrError
pub type Result<T> = std::result::Result<T, BlogrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blogr_directory_suggestion() {
        let err = BlogrError::NotBlogrDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("blogr init"));
        assert!(msg.contains("BLOGR_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_post_id_example() {
        let err = BlogrError::InvalidPostId("abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("blogr show"));
    }

    #[test]
    fn test_post_not_found_suggestions() {
        let err = BlogrError::PostNotFound(42);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("blogr list"));
        assert!(msg.contains("42"));
    }

    #[test]
    fn test_editor_error_suggestions() {
        let err = BlogrError::Editor("Editor not found".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("EDITOR environment variable"));
        assert!(msg.contains("blogr config editor"));
        assert!(msg.contains("--content"));
    }

    #[test]
    fn test_storage_error_suggestions() {
        let err = BlogrError::Storage("failed to write posts.json".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("disk space"));
        assert!(msg.contains("not written"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = BlogrError::Config("bad key".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad key");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            BlogrError::NotBlogrDirectory(PathBuf::from("/x")).exit_code(),
            2
        );
        assert_eq!(BlogrError::InvalidPostId("x".into()).exit_code(), 3);
        assert_eq!(BlogrError::PostNotFound(1).exit_code(), 4);
        assert_eq!(BlogrError::Config("x".into()).exit_code(), 1);
    }
}
