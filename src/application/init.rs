//! Initialize blog use case

use crate::error::Result;
use crate::infrastructure::{BlogRepository, Config};
use std::fs;
use std::path::Path;

/// Initialize a new blog at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = BlogRepository::new(path.to_path_buf());

    // Initialize .blogr directory
    repo.initialize()?;

    // Create and save default config
    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized blogr blog at {}", path.display());

    Ok(())
}
