//! Config management use case

use crate::error::{BlogrError, Result};
use crate::infrastructure::{BlogRepository, Config};

/// Service for managing blog configuration
pub struct ConfigService {
    repository: BlogRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: BlogRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(BlogrError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: editor, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "created" => {
                return Err(BlogrError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(BlogrError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
