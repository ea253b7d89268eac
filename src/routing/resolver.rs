//! Route resolution and the data-fetch contract.
//!
//! # Responsibilities
//! - Map a URL path to a route key plus extracted parameters
//! - Bind the matched route to the data it must fetch
//! - Execute that fetch against a `PostStore`

use crate::routing::table::{RouteKey, ROUTES};
use crate::routing::NavData;
use crate::store::{PostStore, StoreResult};

/// What a route needs fetched before it can render.
///
/// Absence of fetching is a structural fact of the plan, not a runtime
/// presence check on the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// The route renders without any data.
    Nothing,
    /// Fetch every post summary, ascending by date.
    AllSummaries,
    /// Fetch one full post record.
    PostById(String),
}

/// The outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub key: RouteKey,
    /// Captured path parameters, in capture order.
    pub params: Vec<String>,
    pub plan: FetchPlan,
}

impl ResolvedRoute {
    /// Execute this route's fetch plan.
    pub async fn fetch<S: PostStore>(&self, store: &S) -> StoreResult<NavData> {
        match &self.plan {
            FetchPlan::Nothing => Ok(NavData::None),
            FetchPlan::AllSummaries => Ok(NavData::Summaries(store.all_summaries().await?)),
            FetchPlan::PostById(id) => Ok(NavData::Post(store.post_by_id(id).await?)),
        }
    }
}

/// Resolve a URL path against the route table.
///
/// Walks the table in order and returns on the first matcher that
/// accepts the path. `None` is a routing failure; callers must treat it
/// as distinct from a fetch error, and no fetch happens for it.
pub fn resolve(path: &str) -> Option<ResolvedRoute> {
    for route in ROUTES {
        let Some(params) = route.matcher.matches(path) else {
            continue;
        };
        let plan = match (route.key, params.as_slice()) {
            (RouteKey::List, _) => FetchPlan::AllSummaries,
            (RouteKey::Detail, [id]) => FetchPlan::PostById(id.clone()),
            // A Detail entry whose matcher captured anything but one id
            // cannot fetch; treat it as no match.
            (RouteKey::Detail, _) => continue,
        };
        return Some(ResolvedRoute {
            key: route.key,
            params,
            plan,
        });
    }
    None
}
