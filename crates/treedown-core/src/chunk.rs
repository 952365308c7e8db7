//! The chunk model: a piece of formatted text plus its spacing requirements.

/// Spacing a chunk requests against its neighbors.
///
/// Vertical fields (`top`, `bottom`) are measured in newline characters, so a
/// value of 2 asks for one blank line. Horizontal fields (`left`, `right`)
/// are measured in single spaces. `None` means "no opinion": it behaves like
/// zero under collapsing but stays distinguishable from an explicit
/// `Some(0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margin {
    pub top: Option<usize>,
    pub bottom: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl Margin {
    /// A margin with only vertical requirements.
    pub fn vertical(top: usize, bottom: usize) -> Self {
        Self {
            top: Some(top),
            bottom: Some(bottom),
            ..Self::default()
        }
    }

    /// A margin with only horizontal requirements.
    pub fn horizontal(left: usize, right: usize) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            ..Self::default()
        }
    }
}

/// The unit of intermediate render output.
///
/// A chunk pairs optional visible text with the spacing it wants around
/// itself. Chunks are created by formatting rules, never mutated, and
/// consumed by [`merge_all`](crate::merge_all). A chunk with no content and
/// a default margin is the identity element for merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    /// Visible text. `None` (or an empty string, normalized away by the
    /// constructors) means the chunk only carries spacing.
    pub content: Option<String>,
    pub margin: Margin,
}

impl Chunk {
    /// The identity chunk: no content, no spacing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A chunk with the given content and margin. Empty content is stored
    /// as `None` so it cannot produce a stray separator when merged.
    pub fn new(content: Option<String>, margin: Margin) -> Self {
        Self {
            content: content.filter(|text| !text.is_empty()),
            margin,
        }
    }

    /// A marginless chunk holding raw text, as produced for text nodes.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(Some(content.into()), Margin::default())
    }

    /// A content-less chunk that only propagates spacing (e.g. a line
    /// break).
    pub fn spacer(margin: Margin) -> Self {
        Self {
            content: None,
            margin,
        }
    }

    /// Whether this chunk contributes visible text.
    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|text| !text.is_empty())
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref().filter(|text| !text.is_empty())
    }

    pub fn into_content(self) -> Option<String> {
        self.content.filter(|text| !text.is_empty())
    }
}

/// Wrap non-empty content in a delimiter pair; empty content stays empty.
///
/// Used for inline delimiters (`**`, `*`, backticks) and code fences.
pub fn wrap(content: &str, prefix: &str, suffix: &str) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("{}{}{}", prefix, content, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_identity_shape() {
        let chunk = Chunk::empty();
        assert!(!chunk.has_content());
        assert_eq!(chunk.margin, Margin::default());
    }

    #[test]
    fn test_new_normalizes_empty_content() {
        let chunk = Chunk::new(Some(String::new()), Margin::vertical(2, 2));
        assert_eq!(chunk.content, None);
        assert!(!chunk.has_content());
    }

    #[test]
    fn test_text_chunk() {
        let chunk = Chunk::text("sample");
        assert_eq!(chunk.content(), Some("sample"));
        assert_eq!(chunk.margin, Margin::default());
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("bold", "**", "**"), "**bold**");
        assert_eq!(wrap("code", "```\n", "\n```"), "```\ncode\n```");
        assert_eq!(wrap("", "**", "**"), "");
    }

    #[test]
    fn test_margin_constructors() {
        assert_eq!(
            Margin::vertical(2, 1),
            Margin {
                top: Some(2),
                bottom: Some(1),
                left: None,
                right: None,
            }
        );
        assert_eq!(
            Margin::horizontal(1, 1),
            Margin {
                top: None,
                bottom: None,
                left: Some(1),
                right: Some(1),
            }
        );
    }
}
