//! # treedown
//!
//! Convert document trees to Markdown.
//!
//! The input is an HTML-like element/text node hierarchy, e.g. a snapshot
//! of rendered content taken for copy-to-clipboard or export. The output is
//! a single Markdown string with block elements separated by exactly one
//! blank line and inline elements joined by single spaces where required.
//!
//! ## Design
//!
//! Rendering is a pure post-order walk: each node's children are rendered
//! into [`Chunk`]s (text plus requested spacing), merged under a
//! margin-collapsing rule (adjacent spacing requirements take the maximum,
//! not the sum), and handed to the node's own tag rule. Tags without a rule
//! are transparent and pass their children through unchanged.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use treedown::{markdown, Node};
//!
//! let mut body = Node::element("body");
//! let mut heading = Node::element("h1");
//! heading.add_child(Node::text("Hello World"));
//! body.add_child(heading);
//!
//! assert_eq!(markdown(&body), "# Hello World");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use treedown::markdown_html;
//!
//! let result = markdown_html("<p>sample</p><p>text</p>");
//! assert_eq!(result, "sample\n\ntext");
//! ```

#[cfg(feature = "html")]
mod html;
pub mod node;
mod render;
mod rules;

#[cfg(feature = "html")]
pub use html::{markdown_html, parse_html};
pub use node::{Node, NodeRef, NodeType};
pub use render::markdown;
pub use treedown_core::{merge, merge_all, wrap, Chunk, Margin};
