//! The post list shown on the homepage.

use crate::markup::{el, link, Node};
use crate::store::PostSummary;

/// Render a heading plus one link per post, in the given order.
///
/// Every link targets `/posts/{id}`; the client runtime intercepts
/// their activation, so without script the links still work as plain
/// server requests.
pub fn render(summaries: &[PostSummary]) -> Node {
    el(
        "div",
        vec![
            el("h1", vec![Node::text("Grumblr")]),
            el(
                "ul",
                summaries
                    .iter()
                    .map(|post| {
                        el(
                            "li",
                            vec![link(format!("/posts/{}", post.id), post.title.clone())],
                        )
                    })
                    .collect(),
            ),
        ],
    )
}
