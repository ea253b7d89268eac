//! Minimal HTML node tree.
//!
//! # Responsibilities
//! - Represent view output as a tree of elements and text
//! - Serialize the tree to an HTML string with escaping
//!
//! # Design Decisions
//! - Views build trees, never strings, so server and client render
//!   identical markup from the same input by construction
//! - Text and attribute values are always escaped; there is no raw-HTML
//!   escape hatch in view code

use std::fmt::Write;

/// One node in a rendered view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Serialize the tree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                for (name, value) in &el.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

/// Create an element node.
pub fn el(tag: &'static str, children: Vec<Node>) -> Node {
    Node::Element(Element {
        tag,
        attrs: Vec::new(),
        children,
    })
}

/// Create an element node with attributes.
pub fn el_attrs(tag: &'static str, attrs: Vec<(&'static str, String)>, children: Vec<Node>) -> Node {
    Node::Element(Element {
        tag,
        attrs,
        children,
    })
}

/// Create an anchor to an in-site path.
pub fn link(href: impl Into<String>, label: impl Into<String>) -> Node {
    el_attrs("a", vec![("href", href.into())], vec![Node::text(label)])
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements() {
        let node = el("div", vec![el("h1", vec![Node::text("Grumblr")])]);
        assert_eq!(node.to_html(), "<div><h1>Grumblr</h1></div>");
    }

    #[test]
    fn escapes_text_content() {
        let node = el("p", vec![Node::text("a < b && c > d")]);
        assert_eq!(node.to_html(), "<p>a &lt; b &amp;&amp; c &gt; d</p>");
    }

    #[test]
    fn escapes_attribute_values() {
        let node = link("/posts/1?a=\"x\"", "title");
        assert_eq!(
            node.to_html(),
            "<a href=\"/posts/1?a=&quot;x&quot;\">title</a>"
        );
    }

    #[test]
    fn identical_trees_render_identical_markup() {
        let a = link("/posts/123", "That's not a knife");
        let b = link("/posts/123", "That's not a knife");
        assert_eq!(a.to_html(), b.to_html());
    }
}
