//! blogr - Single-user note/blog manager
//!
//! A command-line manager for short tagged posts. Posts live in memory
//! as one sorted collection, are persisted as a single JSON blob under
//! `.blogr/`, and are listed most-recently-updated first with tag-based
//! filtering.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BlogrError;
