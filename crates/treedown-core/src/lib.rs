//! treedown-core - chunk model and margin collapsing
//!
//! This crate provides the intermediate data structure used by `treedown`
//! when flattening a document tree into Markdown: the [`Chunk`], a piece of
//! formatted text paired with the spacing it wants against its neighbors,
//! and the merge operation that combines a sequence of chunks while
//! collapsing adjacent spacing requirements (maximum, not sum, analogous to
//! CSS margin collapse).
//!
//! # Example
//!
//! ```rust
//! use treedown_core::{merge_all, Chunk, Margin};
//!
//! let merged = merge_all(vec![
//!     Chunk::new(Some("# Title".to_string()), Margin::vertical(2, 2)),
//!     Chunk::new(Some("First paragraph.".to_string()), Margin::vertical(2, 2)),
//! ]);
//!
//! assert_eq!(merged.content(), Some("# Title\n\nFirst paragraph."));
//! ```

mod chunk;
mod merge;

pub use chunk::{wrap, Chunk, Margin};
pub use merge::{merge, merge_all};
