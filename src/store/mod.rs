//! Post storage subsystem.
//!
//! # Data Flow
//! ```text
//! ResolvedRoute::fetch
//!     → PostStore trait (the only coupling between routing and storage)
//!     → memory.rs (DashMap-backed table, seeded at startup)
//!     → Return: records or StoreError
//! ```
//!
//! # Design Decisions
//! - The core knows field names, not storage details
//! - Summaries are always returned ascending by date
//! - Record-not-found is an explicit error variant, not an Option

pub mod memory;

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use memory::MemoryStore;

/// A full blog post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// ISO-ish date string; lexical order is chronological order.
    pub date: String,
    pub title: String,
    pub body: String,
}

/// The subset of fields the list view receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub date: String,
    pub title: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            date: post.date.clone(),
            title: post.title.clone(),
        }
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists for the requested id.
    #[error("NotFound: no post with id {0}")]
    NotFound(String),

    /// The backing store failed.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Contract every post store must satisfy.
///
/// Implementations must return summaries sorted ascending by date.
pub trait PostStore: Send + Sync {
    /// Fetch id, date and title of every post.
    fn all_summaries(&self) -> impl Future<Output = StoreResult<Vec<PostSummary>>> + Send;

    /// Fetch the full record for one post.
    fn post_by_id(&self, id: &str) -> impl Future<Output = StoreResult<Post>> + Send;
}
