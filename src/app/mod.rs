//! Navigation state machine.
//!
//! # Data Flow
//! ```text
//! LinkActivated / LocationChanged
//!     → Navigator::handle (pure reducer)
//!     → Effects: PushHistory, StartFetch, Render, Notify
//!     → runtime executes effects, feeds FetchSettled back in
//! ```
//!
//! # Design Decisions
//! - The reducer is pure: no store, no browser, no async inside it
//! - State changes only when a fetch settles successfully
//! - Every started fetch carries a generation; settling with a stale
//!   generation is dropped, so a slow earlier fetch can never overwrite
//!   the state of a later navigation
//! - No transition is fatal; failures surface as notices and leave the
//!   previous view intact

use serde::{Deserialize, Serialize};

use crate::routing::{resolve, NavData, ResolvedRoute, RouteKey};
use crate::store::StoreError;

/// What view is displayed and with which data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    pub route_key: RouteKey,
    pub data: NavData,
}

/// A user-visible, non-fatal navigation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No route matches the requested path.
    RouteNotFound,
    /// The route's data fetch failed; carries the underlying message.
    FetchFailed(String),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::RouteNotFound => write!(f, "Not Found"),
            Notice::FetchFailed(message) => write!(f, "{message}"),
        }
    }
}

/// Events fed into the reducer.
#[derive(Debug)]
pub enum NavEvent {
    /// The user activated an in-page link.
    LinkActivated { path: String },
    /// The location changed externally (browser back/forward).
    LocationChanged { path: String },
    /// A previously started fetch completed.
    FetchSettled {
        generation: u64,
        route_key: RouteKey,
        result: Result<NavData, StoreError>,
    },
}

/// Instructions the runtime must carry out after a reduction.
#[derive(Debug)]
pub enum Effect {
    /// Push the path onto the browser history without reloading.
    PushHistory(String),
    /// Run the route's fetch, then feed `FetchSettled` back in.
    StartFetch {
        generation: u64,
        route: ResolvedRoute,
    },
    /// Re-render the current state.
    Render,
    /// Surface a failure to the user.
    Notify(Notice),
}

/// The root coordinator: owns navigation state, reduces events to effects.
#[derive(Debug)]
pub struct Navigator {
    state: NavState,
    generation: u64,
}

impl Navigator {
    /// Start from an already-known state (server-rendered props).
    pub fn new(initial: NavState) -> Self {
        Self {
            state: initial,
            generation: 0,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Reduce one event to the effects it demands.
    pub fn handle(&mut self, event: NavEvent) -> Vec<Effect> {
        match event {
            NavEvent::LinkActivated { path } => {
                let mut effects = vec![Effect::PushHistory(path.clone())];
                effects.extend(self.begin_transition(&path));
                effects
            }
            NavEvent::LocationChanged { path } => self.begin_transition(&path),
            NavEvent::FetchSettled {
                generation,
                route_key,
                result,
            } => self.settle(generation, route_key, result),
        }
    }

    /// Resolve a path and start its fetch, or report a routing failure.
    fn begin_transition(&mut self, path: &str) -> Vec<Effect> {
        let Some(route) = resolve(path) else {
            tracing::warn!(path = %path, "no route matched");
            return vec![Effect::Notify(Notice::RouteNotFound)];
        };

        self.generation += 1;
        tracing::debug!(path = %path, route = ?route.key, generation = self.generation, "navigation started");
        vec![Effect::StartFetch {
            generation: self.generation,
            route,
        }]
    }

    fn settle(
        &mut self,
        generation: u64,
        route_key: RouteKey,
        result: Result<NavData, StoreError>,
    ) -> Vec<Effect> {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return Vec::new();
        }

        match result {
            Err(err) => {
                tracing::warn!(route = ?route_key, error = %err, "fetch failed");
                vec![Effect::Notify(Notice::FetchFailed(err.to_string()))]
            }
            Ok(data) => {
                self.state = NavState { route_key, data };
                vec![Effect::Render]
            }
        }
    }
}
