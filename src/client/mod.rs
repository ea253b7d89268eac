//! Client-side runtime.
//!
//! # Data Flow
//! ```text
//! server-embedded APP_PROPS json
//!     → hydrate (initial NavState, first render)
//! link click / back-forward (from the environment)
//!     → navigate / location_changed
//!     → Navigator reducer → effects
//!     → Environment (history push, DOM patch, notices)
//! ```
//!
//! # Design Decisions
//! - The browser is behind the `Environment` trait; tests attach a
//!   recording fake and no real DOM or history API exists here
//! - `navigate` (internal link activation) and `location_changed`
//!   (external back/forward) funnel into the same reducer
//! - Fetch suspension happens only here, at the effect boundary

use std::collections::VecDeque;

use crate::app::{Effect, NavEvent, NavState, Navigator, Notice};
use crate::routing::{NavData, RouteKey};
use crate::store::PostStore;
use crate::views;

/// The runtime's only window onto the browser.
pub trait Environment {
    /// Push a path onto the session history without reloading.
    fn push_history(&mut self, path: &str);
    /// Replace the rendered document content.
    fn patch(&mut self, markup: &str);
    /// Surface a non-fatal failure to the user.
    fn notify(&mut self, notice: &Notice);
}

/// Drives the navigation state machine against a store and environment.
pub struct ClientRuntime<S, E> {
    navigator: Navigator,
    store: S,
    env: E,
}

impl<S: PostStore, E: Environment> ClientRuntime<S, E> {
    /// Pick up from a server-rendered page.
    ///
    /// Parses the embedded props and performs the initial render from
    /// them; no fetch happens, the server already did it.
    pub fn hydrate(props_json: &str, store: S, env: E) -> Result<Self, serde_json::Error> {
        let initial: NavState = serde_json::from_str(props_json)?;
        let mut runtime = Self {
            navigator: Navigator::new(initial),
            store,
            env,
        };
        runtime.render();
        Ok(runtime)
    }

    /// Mount fresh at a path when no server props exist.
    pub async fn mount_at(path: &str, store: S, env: E) -> Self {
        // Placeholder until the first fetch settles; a failed first
        // fetch leaves it in place and surfaces a notice.
        let placeholder = NavState {
            route_key: RouteKey::List,
            data: NavData::None,
        };
        let mut runtime = Self {
            navigator: Navigator::new(placeholder),
            store,
            env,
        };
        runtime.location_changed(path).await;
        runtime
    }

    /// An in-page link was activated; default navigation is suppressed
    /// by the environment before this is called.
    pub async fn navigate(&mut self, path: &str) {
        let effects = self.navigator.handle(NavEvent::LinkActivated {
            path: path.to_string(),
        });
        self.run_effects(effects).await;
    }

    /// The location changed externally (back/forward).
    pub async fn location_changed(&mut self, path: &str) {
        let effects = self.navigator.handle(NavEvent::LocationChanged {
            path: path.to_string(),
        });
        self.run_effects(effects).await;
    }

    pub fn state(&self) -> &NavState {
        self.navigator.state()
    }

    async fn run_effects(&mut self, effects: Vec<Effect>) {
        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::PushHistory(path) => self.env.push_history(&path),
                Effect::StartFetch { generation, route } => {
                    let result = route.fetch(&self.store).await;
                    queue.extend(self.navigator.handle(NavEvent::FetchSettled {
                        generation,
                        route_key: route.key,
                        result,
                    }));
                }
                Effect::Render => self.render(),
                Effect::Notify(notice) => self.env.notify(&notice),
            }
        }
    }

    fn render(&mut self) {
        match views::render(self.navigator.state()) {
            Ok(node) => self.env.patch(&node.to_html()),
            Err(err) => {
                tracing::error!(error = %err, "render failed");
                self.env.notify(&Notice::FetchFailed(err.to_string()));
            }
        }
    }
}
