//! Margin-collapsing merge of chunk sequences.
//!
//! Adjacent spacing requirements combine by taking the maximum, not the sum,
//! mirroring CSS margin collapse. The vertical axis wins: only when two
//! chunks need no vertical gap are they joined horizontally.

use crate::chunk::{Chunk, Margin};

/// Collapse a pair of optional margins into their maximum, preserving "no
/// opinion" when neither side has one.
fn collapse(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (None, None) => None,
        _ => Some(a.unwrap_or(0).max(b.unwrap_or(0))),
    }
}

/// The effective gap between two facing margins.
fn gap(a: Option<usize>, b: Option<usize>) -> usize {
    a.unwrap_or(0).max(b.unwrap_or(0))
}

/// Merge two adjacent chunks into one.
///
/// Not commutative: `a`'s content precedes `b`'s. The contents are joined by
/// the collapsed vertical gap's worth of newlines, or, when no vertical gap
/// is required, by the collapsed horizontal gap's worth of spaces.
///
/// A chunk without content collapses through: its own facing margins are
/// folded into a single requirement that the merged chunk passes on to the
/// next neighbor, so e.g. consecutive `br` chunks still demand one newline
/// rather than none.
pub fn merge(a: Chunk, b: Chunk) -> Chunk {
    let vertical = gap(a.margin.bottom, b.margin.top);
    let horizontal = gap(a.margin.right, b.margin.left);

    let margin = Margin {
        top: if a.has_content() {
            a.margin.top
        } else {
            collapse(a.margin.top, a.margin.bottom)
        },
        left: if a.has_content() {
            a.margin.left
        } else {
            collapse(a.margin.left, a.margin.right)
        },
        bottom: if b.has_content() {
            b.margin.bottom
        } else {
            collapse(b.margin.top, b.margin.bottom)
        },
        right: if b.has_content() {
            b.margin.right
        } else {
            collapse(b.margin.left, b.margin.right)
        },
    };

    let content = match (a.into_content(), b.into_content()) {
        (Some(first), Some(second)) => {
            let separator = if vertical > 0 {
                "\n".repeat(vertical)
            } else {
                " ".repeat(horizontal)
            };
            Some(format!("{}{}{}", first, separator, second))
        }
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    };

    Chunk { content, margin }
}

/// Merge an ordered sequence of chunks into a single chunk.
///
/// Zero chunks yield the identity chunk and a single chunk is returned
/// unchanged; longer sequences fold pairwise from the right, preserving
/// document order.
pub fn merge_all(chunks: Vec<Chunk>) -> Chunk {
    let mut rest = chunks.into_iter().rev();
    let Some(mut merged) = rest.next() else {
        return Chunk::empty();
    };
    for chunk in rest {
        merged = merge(chunk, merged);
    }
    merged
}
