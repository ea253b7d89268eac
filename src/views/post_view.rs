//! The single-post detail view.

use crate::markup::{el, link, Node};
use crate::store::Post;

/// Render a post's title and body plus a back-link to the homepage.
pub fn render(post: &Post) -> Node {
    el(
        "div",
        vec![
            el("h1", vec![Node::text(post.title.clone())]),
            el("p", vec![Node::text(post.body.clone())]),
            el("p", vec![link("/", "< Grumblr Home")]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knife_post() -> Post {
        Post {
            id: "123".into(),
            date: "2015-01-01".into(),
            title: "That's not a knife".into(),
            body: "This is a knife".into(),
        }
    }

    #[test]
    fn renders_title_body_and_back_link() {
        let html = render(&knife_post()).to_html();
        assert!(html.contains("<h1>That's not a knife</h1>"));
        assert!(html.contains("<p>This is a knife</p>"));
        assert!(html.contains("<a href=\"/\">"));
    }

    #[test]
    fn same_input_renders_identical_markup() {
        assert_eq!(render(&knife_post()).to_html(), render(&knife_post()).to_html());
    }
}
