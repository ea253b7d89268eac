//! View components.
//!
//! Two pure presentation units plus the dispatcher that picks one for
//! the current navigation state. Views never touch storage and hold no
//! state; the same input produces the same markup on server and client.

pub mod post_list;
pub mod post_view;

use thiserror::Error;

use crate::app::NavState;
use crate::markup::Node;
use crate::routing::{NavData, RouteKey};

/// Errors that can occur while rendering a view.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The state's data shape does not fit the route's view.
    #[error("route {route:?} cannot render the fetched data shape")]
    DataMismatch { route: RouteKey },
}

/// Render the view for the current navigation state.
///
/// Dispatch is an exhaustive match on the route key; a key/data
/// mismatch is an error, not a panic.
pub fn render(state: &NavState) -> Result<Node, RenderError> {
    match (state.route_key, &state.data) {
        (RouteKey::List, NavData::Summaries(summaries)) => Ok(post_list::render(summaries)),
        (RouteKey::Detail, NavData::Post(post)) => Ok(post_view::render(post)),
        (route, _) => Err(RenderError::DataMismatch { route }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Post, PostSummary};

    #[test]
    fn dispatches_list_route_to_post_list() {
        let state = NavState {
            route_key: RouteKey::List,
            data: NavData::Summaries(vec![PostSummary {
                id: "123".into(),
                date: "2015-01-01".into(),
                title: "That's not a knife".into(),
            }]),
        };
        let html = render(&state).unwrap().to_html();
        assert!(html.contains("<h1>Grumblr</h1>"));
    }

    #[test]
    fn dispatches_detail_route_to_post_view() {
        let state = NavState {
            route_key: RouteKey::Detail,
            data: NavData::Post(Post {
                id: "123".into(),
                date: "2015-01-01".into(),
                title: "That's not a knife".into(),
                body: "This is a knife".into(),
            }),
        };
        let html = render(&state).unwrap().to_html();
        assert!(html.contains("This is a knife"));
    }

    #[test]
    fn mismatched_shapes_are_an_error() {
        let state = NavState {
            route_key: RouteKey::Detail,
            data: NavData::None,
        };
        let err = render(&state).unwrap_err();
        assert!(matches!(err, RenderError::DataMismatch { route: RouteKey::Detail }));
    }
}
