//! Depth-first tree walk producing Markdown.
//!
//! The walk is post-order: a node's children are rendered and merged first,
//! then the node's own rule turns that merged content into chunks. The
//! top-level entry merges the root's chunk sequence and returns its content.

use treedown_core::{merge_all, Chunk};

use crate::node::{Node, NodeRef, NodeType};
use crate::rules;

/// Convert a document tree to Markdown.
///
/// The root node itself is treated as a container: only its descendants are
/// formatted, matching how a document body is extracted. A tree with no
/// visible content yields an empty string.
pub fn markdown(root: &Node) -> String {
    merge_all(render_children(root))
        .into_content()
        .unwrap_or_default()
}

/// Render every child of `parent`, in document order.
///
/// Text nodes become marginless chunks of their literal text. Elements
/// dispatch through the rule table. Anything else (comments, doctypes)
/// contributes nothing.
fn render_children(parent: &Node) -> Vec<Chunk> {
    let parent_tag = parent.tag_name();
    let mut chunks = Vec::new();

    for child in parent.children() {
        match child.node_type {
            NodeType::Text => {
                chunks.push(Chunk::text(child.node_value.as_deref().unwrap_or("")));
            }
            NodeType::Element => {
                chunks.extend(render_element(NodeRef::with_parent(child, &parent_tag)));
            }
            _ => {}
        }
    }

    chunks
}

/// Apply the tag rule table to one element.
///
/// Tags without a rule of their own are transparent: their children's chunks
/// pass through unchanged, so unknown wrappers cost nothing.
fn render_element(element: NodeRef) -> Vec<Chunk> {
    let chunks = render_children(element.node);

    match element.tag_name().as_str() {
        "p" => vec![rules::paragraph(merged_content(chunks))],
        "br" => vec![rules::line_break()],
        "em" => vec![rules::emphasis(merged_content(chunks))],
        "strong" => vec![rules::strong(merged_content(chunks))],
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            rules::heading(&element, merged_content(chunks))
        }
        // Inside a pre the fence comes from the pre rule; the code element
        // just hands its children through.
        "code" if element.parent_tag() == Some("pre") => chunks,
        "code" => vec![rules::inline_code(merged_content(chunks))],
        "pre" => vec![rules::code_block(merged_content(chunks))],
        "a" => vec![rules::link(&element, merged_content(chunks))],
        "li" => vec![rules::list_item(merged_content(chunks))],
        "ol" => vec![rules::ordered_list(chunks)],
        "ul" => vec![rules::unordered_list(chunks)],
        "img" => vec![rules::image(&element)],
        "tr" => vec![rules::table_row(chunks)],
        "thead" => rules::table_head(merge_all(chunks)),
        "tbody" => vec![rules::table_body(merged_content(chunks))],
        _ => chunks,
    }
}

fn merged_content(chunks: Vec<Chunk>) -> Option<String> {
    merge_all(chunks).into_content()
}
