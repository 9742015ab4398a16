//! Parser for Firefox bookmarks backups (`bookmarks-YYYY-MM-DD.json`)
//!
//! # Error Handling Strategy
//!
//! Unlike a line-oriented log, a bookmarks backup is a single JSON document, so parsing is
//! all-or-nothing:
//!
//! - **Not JSON**: reported as [`BookmarkError::Json`](crate::BookmarkError::Json) straight away.
//! - **Missing or mistyped field**: reported as
//!   [`BookmarkError::MalformedInput`](crate::BookmarkError::MalformedInput) naming the field and
//!   the node position (`$.children[0].children[3]`), so a CLI can point at the broken entry.
//! - **Optional fields** (`charset`, `iconuri`, `annos`, `root` below the top level) fall back to
//!   empty values instead of failing.

mod fields;
pub mod tree;

pub use tree::{parse, parse_file};
