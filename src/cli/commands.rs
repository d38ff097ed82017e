//! CLI command definitions

use crate::domain::PostId;
use crate::error::{BlogrError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogr")]
#[command(about = "Single-user note/blog manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a new post
    New {
        /// Post title
        title: String,

        /// Post body; omit to compose in your editor
        #[arg(short, long)]
        content: Option<String>,

        /// Tag label; repeatable, comma-separated values are split
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Edit an existing post (omitted fields keep their current values)
    Edit {
        /// Post id (see 'blogr list')
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New body
        #[arg(short, long)]
        content: Option<String>,

        /// Replacement tag labels; repeatable
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Option<Vec<String>>,

        /// Remove all tags from the post
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,

        /// Edit the current body in your editor
        #[arg(long, conflicts_with = "content")]
        compose: bool,
    },

    /// Delete a post
    Delete {
        /// Post id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show a single post in full
    Show {
        /// Post id
        id: String,
    },

    /// List posts, most recently updated first
    List {
        /// Only posts carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Show at most this many posts
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List all distinct tags
    Tags,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Parse a raw id argument into a [`PostId`]
pub fn parse_post_id(raw: &str) -> Result<PostId> {
    raw.trim()
        .parse::<i64>()
        .map(PostId)
        .map_err(|_| BlogrError::InvalidPostId(raw.to_string()))
}

/// Normalize tag arguments: split comma-separated chunks, trim
/// whitespace, and drop empties. Duplicates are kept; the store permits
/// them.
pub fn split_tags(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|chunk| chunk.split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
