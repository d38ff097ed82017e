//! Record store owning the authoritative post collection
//!
//! The store keeps every post in memory, sorted most-recently-updated
//! first, and writes the whole collection to its backend after each
//! mutation. One fixed key identifies the collection; there are no
//! per-record slots.

use crate::domain::post::{IdGenerator, Post, PostId};
use crate::error::Result;
use crate::infrastructure::StorageBackend;

/// Fixed backend key under which the whole collection lives
pub const POSTS_KEY: &str = "posts";

/// Authoritative, sorted collection of posts backed by a key-value slot
pub struct PostStore<B: StorageBackend> {
    backend: B,
    posts: Vec<Post>,
    ids: IdGenerator,
    recovered_from_corrupt: bool,
}

impl<B: StorageBackend> PostStore<B> {
    /// Load the collection from the backend.
    ///
    /// An absent slot yields an empty store. A malformed blob also yields
    /// an empty store, flagged through [`recovered_from_corrupt`], so a
    /// damaged data file never prevents the store from opening. Backend
    /// read failures other than "absent" propagate.
    ///
    /// [`recovered_from_corrupt`]: PostStore::recovered_from_corrupt
    pub fn open(backend: B) -> Result<Self> {
        let mut recovered = false;

        let mut posts: Vec<Post> = match backend.load(POSTS_KEY)? {
            None => Vec::new(),
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(posts) => posts,
                Err(_) => {
                    recovered = true;
                    Vec::new()
                }
            },
        };

        sort_posts(&mut posts);

        // Seed the id generator past every loaded id so reload can never
        // reissue an existing identity.
        let max_id = posts.iter().map(|p| p.id.0).max().unwrap_or(0);

        Ok(PostStore {
            backend,
            posts,
            ids: IdGenerator::seeded(max_id),
            recovered_from_corrupt: recovered,
        })
    }

    /// Whether the last load discarded a malformed blob
    pub fn recovered_from_corrupt(&self) -> bool {
        self.recovered_from_corrupt
    }

    /// Create a post and persist the collection.
    ///
    /// The store imposes no constraint on the inputs; validation of
    /// non-empty title/content belongs to the caller.
    pub fn create(&mut self, title: &str, content: &str, tags: Vec<String>) -> Result<Post> {
        let id = self.ids.next_id(chrono::Utc::now());
        let post = Post::new(id, title.to_string(), content.to_string(), tags);
        let snapshot = post.clone();

        self.posts.push(post);
        sort_posts(&mut self.posts);
        self.persist()?;

        Ok(snapshot)
    }

    /// Replace a post's title/content/tags and persist.
    ///
    /// Returns `Ok(None)` without any side effect when `id` is absent.
    /// `updated_at` is refreshed; `id` and `created_at` never change.
    pub fn update(
        &mut self,
        id: PostId,
        title: &str,
        content: &str,
        tags: Vec<String>,
    ) -> Result<Option<Post>> {
        let Some(idx) = self.posts.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        self.posts[idx].apply_edit(title.to_string(), content.to_string(), tags);
        sort_posts(&mut self.posts);
        self.persist()?;

        Ok(self.get_by_id(id).cloned())
    }

    /// Remove the post with the given id, if any, and persist.
    ///
    /// Deleting an absent id is a no-op, not an error; the returned bool
    /// reports whether a post was actually removed.
    pub fn delete(&mut self, id: PostId) -> Result<bool> {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        let removed = self.posts.len() != before;

        self.persist()?;
        Ok(removed)
    }

    /// Linear lookup by id
    pub fn get_by_id(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Every post carrying an exact match for `tag`, in current sort order
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// The whole collection, most-recently-updated first
    pub fn list_all(&self) -> &[Post] {
        &self.posts
    }

    /// Union of all tags across all posts, de-duplicated, first-seen order
    pub fn distinct_tags(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut tags = Vec::new();

        for post in &self.posts {
            for tag in &post.tags {
                if seen.insert(tag.clone()) {
                    tags.push(tag.clone());
                }
            }
        }

        tags
    }

    /// Serialize the full collection and replace the backend slot.
    ///
    /// A rejected write surfaces as a Storage error while the in-memory
    /// collection stays mutated; there is no rollback.
    fn persist(&self) -> Result<()> {
        let blob = serde_json::to_string_pretty(&self.posts)?;
        self.backend.save(POSTS_KEY, &blob)
    }
}

/// Stable sort, non-increasing by `updated_at`. Ties keep whatever
/// relative order the stable sort finds them in.
fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}
