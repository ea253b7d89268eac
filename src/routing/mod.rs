//! Routing subsystem, shared by the server and the client runtime.
//!
//! # Data Flow
//! ```text
//! URL path string
//!     → resolver.rs (walk the table, evaluate matchers)
//!     → Return: ResolvedRoute {key, params, plan} or no match
//!
//! ResolvedRoute::fetch
//!     → execute the route's FetchPlan against a PostStore
//!     → Return: NavData or StoreError
//! ```
//!
//! # Design Decisions
//! - Route table is static and ordered; first match wins
//! - No regex: the only parameter style is one numeric path segment
//! - No match is an explicit Option::None, distinct from fetch errors
//! - Which data a route fetches is a closed enum, not a runtime lookup

pub mod resolver;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::store::{Post, PostSummary};

pub use resolver::{resolve, FetchPlan, ResolvedRoute};
pub use table::{Matcher, Route, RouteKey, ROUTES};

/// The data a completed fetch hands to the coordinator.
///
/// Untagged so the embedded page props serialize as the natural JSON
/// shapes: an array of summaries, a single post object, or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavData {
    Summaries(Vec<PostSummary>),
    Post(Post),
    None,
}
