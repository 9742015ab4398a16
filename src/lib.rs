//! Bookmark Export - Convert Firefox bookmark backups to CSV and HTML tables
//!
//! This library reads the JSON backups Firefox writes to `bookmarkbackups/`. It supports:
//!
//! - Parsing the nested folder tree into [`Bookmark`] nodes at any depth
//! - Flattening and navigating the tree (pre-order walk, leaf items, folder lookup)
//! - Removing duplicate bookmarks by exact URI
//! - Rendering a flat list of bookmarks as CSV or as an HTML table
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use bookmark_export::{format_html, parse_file, remove_duplicates};
//!
//! let root = parse_file(Path::new("bookmarks.json"))?;
//! let items: Vec<_> = root.leaves().into_iter().cloned().collect();
//! let html = format_html(&remove_duplicates(&items));
//! std::fs::write("bookmarks.html", html)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod filters;
pub mod formatters;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use error::{BookmarkError, Result};
pub use filters::remove_duplicates;
pub use formatters::{HtmlOptions, OutputFormat, format_csv, format_html, format_html_with};
pub use models::{Annotation, Bookmark};
pub use parsers::{parse, parse_file};
