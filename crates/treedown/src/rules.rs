//! Per-tag formatting rules.
//!
//! Each rule receives the element's merged child content (and, where needed,
//! the element itself for attribute lookup) and produces the chunk(s) that
//! represent the element. Spacing is expressed through chunk margins and
//! resolved later by merging; no rule emits surrounding newlines itself.

use once_cell::sync::Lazy;
use regex::Regex;
use treedown_core::{wrap, Chunk, Margin};

use crate::node::NodeRef;

/// A line that already carries a list marker, with any nesting indent.
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ *(?:\d+\.|-) ").unwrap());

pub(crate) fn paragraph(content: Option<String>) -> Chunk {
    Chunk::new(content, Margin::vertical(2, 2))
}

pub(crate) fn line_break() -> Chunk {
    Chunk::spacer(Margin {
        bottom: Some(1),
        ..Margin::default()
    })
}

pub(crate) fn emphasis(content: Option<String>) -> Chunk {
    let content = content.unwrap_or_default();
    Chunk::new(
        Some(wrap(content.trim(), "*", "*")),
        Margin::default(),
    )
}

pub(crate) fn strong(content: Option<String>) -> Chunk {
    let content = content.unwrap_or_default();
    Chunk::new(
        Some(wrap(content.trim(), "**", "**")),
        Margin::horizontal(1, 1),
    )
}

/// `h1`..`h6`. An empty heading produces no chunk at all; a heading with an
/// `id` attribute gets a trailing `{#id}` anchor.
pub(crate) fn heading(element: &NodeRef, content: Option<String>) -> Vec<Chunk> {
    let Some(content) = content else {
        return Vec::new();
    };
    let tag = element.tag_name();
    let level: usize = tag[1..].parse().unwrap_or(1);

    let mut text = format!("{} {}", "#".repeat(level), content);
    if let Some(id) = element.attr("id") {
        text.push_str(&format!(" {{#{}}}", id));
    }

    vec![Chunk::new(Some(text), Margin::vertical(2, 2))]
}

/// `code` outside `pre`. Inside `pre` the element is transparent and the
/// fence comes from the `pre` rule instead.
pub(crate) fn inline_code(content: Option<String>) -> Chunk {
    let content = content.unwrap_or_default();
    Chunk::new(Some(wrap(&content, "`", "`")), Margin::horizontal(1, 1))
}

pub(crate) fn code_block(content: Option<String>) -> Chunk {
    let content = content.unwrap_or_default();
    Chunk::new(
        Some(wrap(&content, "```\n", "\n```")),
        Margin::vertical(2, 2),
    )
}

/// `a`. A missing `href` degrades to an empty link target rather than
/// failing.
pub(crate) fn link(element: &NodeRef, content: Option<String>) -> Chunk {
    let href = element.attr("href").unwrap_or("");
    Chunk::new(
        Some(format!("[{}]({})", content.unwrap_or_default(), href)),
        Margin::horizontal(1, 1),
    )
}

pub(crate) fn image(element: &NodeRef) -> Chunk {
    let alt = element.attr("alt").unwrap_or("");
    let src = element.attr("src").unwrap_or("");
    Chunk::new(Some(format!("![{}]({})", alt, src)), Margin::vertical(2, 2))
}

pub(crate) fn list_item(content: Option<String>) -> Chunk {
    Chunk::new(content, Margin::horizontal(1, 1))
}

pub(crate) fn ordered_list(items: Vec<Chunk>) -> Chunk {
    let lines: Vec<String> = list_entries(items)
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, indent_list_item(&item)))
        .collect();
    Chunk::new(Some(lines.join("\n")), Margin::vertical(2, 2))
}

pub(crate) fn unordered_list(items: Vec<Chunk>) -> Chunk {
    let lines: Vec<String> = list_entries(items)
        .map(|item| format!("- {}", indent_list_item(&item)))
        .collect();
    Chunk::new(Some(lines.join("\n")), Margin::vertical(2, 2))
}

/// Item chunks that actually render as entries. Whitespace-only chunks come
/// from formatting between `<li>` tags and would otherwise become phantom
/// items.
fn list_entries(items: Vec<Chunk>) -> impl Iterator<Item = String> {
    items
        .into_iter()
        .filter_map(Chunk::into_content)
        .filter(|content| !content.trim().is_empty())
}

/// Flatten a rendered list item for embedding in its parent list: paragraph
/// breaks collapse to single newlines, and every line already carrying a
/// list marker gains two spaces of indent. Nested lists end up indented two
/// spaces per level without re-walking the tree.
fn indent_list_item(content: &str) -> String {
    content
        .replace("\n\n", "\n")
        .lines()
        .map(|line| {
            if LIST_MARKER.is_match(line) {
                format!("  {}", line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `tr`. Cell chunks arrive pre-flattened because `td`/`th` are transparent.
pub(crate) fn table_row(cells: Vec<Chunk>) -> Chunk {
    let cells: Vec<String> = cells
        .into_iter()
        .filter_map(Chunk::into_content)
        .filter(|content| !content.trim().is_empty())
        .collect();

    let content = if cells.is_empty() {
        None
    } else {
        Some(format!("| {} |", cells.join(" | ")))
    };
    Chunk::new(content, Margin::vertical(1, 1))
}

/// `thead`. Produces the header row (top margin forced to 2, the table's
/// outer gap) followed by the `| - | - |` separator row GitHub-flavored
/// tables require. Column count is recovered from the rendered row itself.
pub(crate) fn table_head(row: Chunk) -> Vec<Chunk> {
    let Some(content) = row.content.clone() else {
        return Vec::new();
    };

    let columns = content.split('|').count().saturating_sub(2);
    let separator = format!("| {} |", vec!["-"; columns].join(" | "));

    vec![
        Chunk {
            margin: Margin {
                top: Some(2),
                ..row.margin
            },
            ..row
        },
        Chunk::new(Some(separator), Margin::vertical(1, 1)),
    ]
}

pub(crate) fn table_body(content: Option<String>) -> Chunk {
    Chunk::new(
        content,
        Margin {
            bottom: Some(2),
            ..Margin::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_emphasis_is_identity() {
        let chunk = emphasis(Some("  ".to_string()));
        assert!(!chunk.has_content());
        assert_eq!(chunk.margin, Margin::default());
    }

    #[test]
    fn test_strong_trims_before_wrapping() {
        let chunk = strong(Some("strong\u{a0}".to_string()));
        assert_eq!(chunk.content(), Some("**strong**"));
    }

    #[test]
    fn test_empty_heading_renders_nothing() {
        let node = crate::node::Node::element("h2");
        assert!(heading(&NodeRef::new(&node), None).is_empty());
    }

    #[test]
    fn test_heading_with_id() {
        let node = crate::node::Node::element_with_attrs("h3", vec![("id", "anchor")]);
        let chunks = heading(&NodeRef::new(&node), Some("heading".to_string()));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content(), Some("### heading {#anchor}"));
    }

    #[test]
    fn test_link_without_href_fails_soft() {
        let node = crate::node::Node::element("a");
        let chunk = link(&NodeRef::new(&node), Some("text".to_string()));
        assert_eq!(chunk.content(), Some("[text]()"));
    }

    #[test]
    fn test_image_attributes_default_to_empty() {
        let node = crate::node::Node::element("img");
        assert_eq!(image(&NodeRef::new(&node)).content(), Some("![]()"));
    }

    #[test]
    fn test_ordered_list_numbering_restarts_per_list() {
        let items = vec![Chunk::text("a"), Chunk::text("b")];
        assert_eq!(ordered_list(items).content(), Some("1. a\n2. b"));

        let again = vec![Chunk::text("c")];
        assert_eq!(ordered_list(again).content(), Some("1. c"));
    }

    #[test]
    fn test_lists_skip_whitespace_chunks() {
        let items = vec![
            Chunk::text("  "),
            Chunk::text("a"),
            Chunk::text("\n"),
            Chunk::text("b"),
        ];
        assert_eq!(unordered_list(items).content(), Some("- a\n- b"));
    }

    #[test]
    fn test_indent_list_item_collapses_and_indents() {
        assert_eq!(indent_list_item("a\n\n- b\n- c"), "a\n  - b\n  - c");
    }

    #[test]
    fn test_indent_list_item_accumulates_per_level() {
        // A second wrapping pushes already-nested markers two spaces deeper.
        assert_eq!(indent_list_item("a\n  1. b"), "a\n    1. b");
    }

    #[test]
    fn test_table_row_joins_cells() {
        let cells = vec![Chunk::text("a"), Chunk::text("b")];
        let row = table_row(cells);
        assert_eq!(row.content(), Some("| a | b |"));
        assert_eq!(row.margin, Margin::vertical(1, 1));
    }

    #[test]
    fn test_table_head_separator_matches_column_count() {
        let row = Chunk::new(Some("| a | b |".to_string()), Margin::vertical(1, 1));
        let chunks = table_head(row);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].content(), Some("| a | b |"));
        assert_eq!(chunks[0].margin.top, Some(2));
        assert_eq!(chunks[1].content(), Some("| - | - |"));
    }

    #[test]
    fn test_empty_table_head_renders_nothing() {
        assert!(table_head(Chunk::empty()).is_empty());
    }
}
