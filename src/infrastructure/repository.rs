//! Blog root discovery and layout

use crate::error::{BlogrError, Result};
use crate::infrastructure::{data_dir, Config, JsonFileBackend};
use std::fs;
use std::path::{Path, PathBuf};

/// A blog root directory holding `.blogr/` (config and the post blob)
#[derive(Debug, Clone)]
pub struct BlogRepository {
    pub root: PathBuf,
}

impl BlogRepository {
    /// Create a repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        BlogRepository { root }
    }

    /// Discover the blog root.
    /// First checks the BLOGR_ROOT environment variable, then walks up
    /// from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("BLOGR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_blogr_dir(&path) {
                return Ok(BlogRepository::new(path));
            } else {
                return Err(BlogrError::Config(format!(
                    "BLOGR_ROOT is set to '{}' but no .blogr directory found. \
                    Run 'blogr init' in that directory or unset BLOGR_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the blog root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_blogr_dir(&current) {
                return Ok(BlogRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(BlogrError::NotBlogrDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_blogr_dir(path: &Path) -> bool {
        data_dir(path).is_dir()
    }

    /// Check if .blogr exists under this root
    pub fn is_initialized(&self) -> bool {
        Self::has_blogr_dir(&self.root)
    }

    /// Create the .blogr directory
    pub fn initialize(&self) -> Result<()> {
        let blogr_dir = data_dir(&self.root);

        if blogr_dir.exists() {
            return Err(BlogrError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&blogr_dir)?;
        Ok(())
    }

    /// Load configuration from .blogr/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .blogr/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Storage backend rooted at this repository's data directory
    pub fn backend(&self) -> JsonFileBackend {
        JsonFileBackend::new(data_dir(&self.root))
    }
}
