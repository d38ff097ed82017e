//! Infrastructure layer - External I/O and persistence

pub mod backend;
pub mod config;
pub mod editor;
pub mod repository;

pub use backend::{data_dir, JsonFileBackend, MemoryBackend, StorageBackend};
pub use config::Config;
pub use editor::EditorSession;
pub use repository::BlogRepository;
