//! Data model for a parsed bookmarks export.
//!
//! - [`Bookmark`] - one node of the tree (folder, item or separator)
//! - [`Annotation`] - optional metadata attached to a node
//! - [`Timestamp`] - seconds since the epoch, displayed through chrono when representable
//!
//! Trees are built by [`crate::parsers::parse`] and are not mutated afterwards.

pub mod bookmark;
pub mod timestamp;

pub use bookmark::{Annotation, Bookmark, KIND_BOOKMARK, KIND_CONTAINER, KIND_SEPARATOR, Walk};
pub use timestamp::Timestamp;
