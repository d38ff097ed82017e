//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{parse_post_id, split_tags, Cli, Commands};
pub use output::{format_post, format_post_list, format_tag_list};
