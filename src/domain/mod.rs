//! Domain layer - Post model and the record store

pub mod post;
pub mod store;

pub use post::{IdGenerator, Post, PostId};
pub use store::{PostStore, POSTS_KEY};
