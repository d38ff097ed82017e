//! Application layer - Use cases and orchestration

pub mod compose;
pub mod init;
pub mod manage_config;

pub use compose::compose_body;
pub use manage_config::ConfigService;
