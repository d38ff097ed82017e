//! Configuration management

use crate::error::{BlogrError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Load config from .blogr/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".blogr").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlogrError::NotBlogrDirectory(path.to_path_buf())
            } else {
                BlogrError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| BlogrError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .blogr/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let blogr_dir = path.join(".blogr");
        let config_path = blogr_dir.join("config.toml");

        if !blogr_dir.exists() {
            fs::create_dir(&blogr_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| BlogrError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert!(!config.editor.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".blogr").exists());
        assert!(temp.path().join(".blogr/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.editor, config.editor);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            BlogrError::NotBlogrDirectory(_) => {}
            _ => panic!("Expected NotBlogrDirectory error"),
        }
    }

    #[test]
    fn test_get_editor_falls_back_to_config_value() {
        let config = Config {
            editor: "default-editor".to_string(),
            created: Utc::now(),
        };

        // Might return an env var if EDITOR or VISUAL is set in the test
        // environment, but it is never empty
        let editor = config.get_editor();
        assert!(!editor.is_empty());
    }
}
