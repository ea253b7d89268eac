//! In-memory post table.

use dashmap::DashMap;

use crate::store::{Post, PostStore, PostSummary, StoreError, StoreResult};

/// DashMap-backed post store.
///
/// Immutable after seeding in practice, but the map allows concurrent
/// reads from every request handler without locks.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: DashMap<String, Post>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the seed posts.
    pub fn with_seed_posts() -> Self {
        let store = Self::new();
        for post in seed_posts() {
            store.insert(post);
        }
        store
    }

    /// Insert or replace a post.
    pub fn insert(&self, post: Post) {
        self.posts.insert(post.id.clone(), post);
    }

    /// Number of stored posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostStore for MemoryStore {
    async fn all_summaries(&self) -> StoreResult<Vec<PostSummary>> {
        let mut summaries: Vec<PostSummary> = self
            .posts
            .iter()
            .map(|entry| PostSummary::from(entry.value()))
            .collect();
        summaries.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(summaries)
    }

    async fn post_by_id(&self, id: &str) -> StoreResult<Post> {
        self.posts
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

/// The two posts every fresh deployment starts with.
///
/// Also used as the fixture data for scenario tests.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "123".to_string(),
            date: "2015-01-01".to_string(),
            title: "That's not a knife".to_string(),
            body: "This is a knife".to_string(),
        },
        Post {
            id: "345".to_string(),
            date: "2015-01-02".to_string(),
            title: "A dingo stole my baby's...".to_string(),
            body: "... heart. She's really in love with it :-(".to_string(),
        },
    ]
}
