//! Tabular renderings of a flat list of bookmarks.
//!
//! Both formatters emit the same ten columns in the same order (see [`COLUMNS`]) and are
//! pure functions of their input.

pub mod csv;
pub mod html;

use std::path::Path;

use clap::ValueEnum;

use crate::models::Bookmark;

pub use self::csv::format_csv;
pub use self::html::{HtmlOptions, format_html, format_html_with};

/// Column labels, in output order
pub const COLUMNS: [&str; 10] = [
    "ID",
    "GUID",
    "Title",
    "Index",
    "Date Added",
    "Last Modified",
    "Charset",
    "Type",
    "URI",
    "Icon URI",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Html,
}

impl OutputFormat {
    /// Guess the format from a file extension (`.csv`, `.html`, `.htm`), case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Field values of one row, matching [`COLUMNS`]
pub(crate) fn row_fields(item: &Bookmark) -> [String; 10] {
    [
        item.id.to_string(),
        item.guid.clone(),
        item.title.clone(),
        item.index.to_string(),
        item.date_added.to_string(),
        item.last_modified.to_string(),
        item.charset.clone(),
        item.kind.clone(),
        item.uri.clone(),
        item.icon_uri.clone(),
    ]
}
