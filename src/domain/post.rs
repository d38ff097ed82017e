//! Post model and id generation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a post.
///
/// Ids are millisecond timestamps at creation time, bumped past the last
/// issued value when the clock has not advanced, so two creations within
/// the same tick still get distinct ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user-authored entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Ordered tag labels; duplicates within a post are permitted
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a post with both timestamps stamped to now
    pub fn new(id: PostId, title: String, content: String, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Post {
            id,
            title,
            content,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title/content/tags and refresh the update timestamp.
    /// `id` and `created_at` never change.
    pub fn apply_edit(&mut self, title: String, content: String, tags: Vec<String>) {
        self.title = title;
        self.content = content;
        self.tags = tags;
        self.updated_at = Utc::now();
    }

    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Issues unique, strictly increasing post ids derived from the clock
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    /// Seed the generator so the next id is strictly greater than `last`.
    /// Used after load to stay clear of ids already in the collection.
    pub fn seeded(last: i64) -> Self {
        IdGenerator { last }
    }

    /// Issue the next id for the given instant
    pub fn next_id(&mut self, now: DateTime<Utc>) -> PostId {
        let mut candidate = now.timestamp_millis();
        if candidate <= self.last {
            candidate = self.last + 1;
        }
        self.last = candidate;
        PostId(candidate)
    }
}
