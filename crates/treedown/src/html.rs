//! HTML parsing support.
//!
//! This module converts HTML strings into the [`Node`] tree consumed by the
//! renderer. It is the only part of the crate that depends on an HTML
//! parser, and it sits behind the `html` feature so tree-producing hosts
//! (e.g. a DOM snapshot) can skip it entirely.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;
use crate::render::markdown;

/// Parse an HTML fragment into a Node tree.
///
/// # Example
///
/// ```rust
/// use treedown::{markdown, parse_html};
///
/// let root = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(markdown(&root), "# Hello *World*");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert an HTML fragment straight to Markdown.
pub fn markdown_html(html: &str) -> String {
    markdown(&parse_html(html))
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();

    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
