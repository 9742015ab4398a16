use csv::{Terminator, WriterBuilder};
use tracing::debug;

use super::row_fields;
use crate::error::Result;
use crate::models::Bookmark;

/// Render items as headerless CSV, one `\n`-terminated row of ten fields per item
///
/// Timestamps use chrono's default display form (`2020-09-13 12:26:40 UTC`), or the raw
/// number when chrono cannot represent them. Quoting of commas, quotes and newlines is left
/// to the `csv` writer.
///
/// # Errors
///
/// Only fails if the in-memory writer does, which does not happen for records built by
/// [`crate::parse`].
pub fn format_csv(items: &[Bookmark]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for item in items {
        writer.write_record(row_fields(item))?;
    }

    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    let text = String::from_utf8(bytes)?;
    debug!(rows = items.len(), bytes = text.len(), "formatted CSV");
    Ok(text)
}
