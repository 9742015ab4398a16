use std::borrow::Cow;

use tracing::debug;

use super::{COLUMNS, row_fields};
use crate::models::Bookmark;

const DEFAULT_TITLE: &str = "bookmark-export";

/// Options for [`format_html_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Contents of the `<title>` element
    pub title: String,
    /// Escape `& < > " '` in cell values. Off by default, so a value containing markup is
    /// written as-is and can break the table.
    pub escape: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self { title: DEFAULT_TITLE.to_string(), escape: false }
    }
}

/// Render items as a standalone HTML table with default [`HtmlOptions`]
pub fn format_html(items: &[Bookmark]) -> String {
    format_html_with(items, &HtmlOptions::default())
}

/// Render items as a standalone HTML document holding one `<table>`
///
/// The table has one header row followed by one row per item, in input order.
pub fn format_html_with(items: &[Bookmark], options: &HtmlOptions) -> String {
    let mut out = String::with_capacity(256 + items.len() * 256);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>");
    out.push_str(&escape_html(&options.title));
    out.push_str("</title>\n</head>\n<body>\n<table>\n");

    out.push_str("<tr>");
    for label in COLUMNS {
        out.push_str("<th>");
        out.push_str(label);
        out.push_str("</th>");
    }
    out.push_str("</tr>\n");

    for item in items {
        out.push_str("<tr>");
        for value in row_fields(item) {
            out.push_str("<td>");
            if options.escape {
                out.push_str(&escape_html(&value));
            } else {
                out.push_str(&value);
            }
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n</body>\n</html>\n");
    debug!(rows = items.len(), escaped = options.escape, "formatted HTML");
    out
}

/// Replaces the five HTML-significant characters with entities
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KIND_BOOKMARK, Timestamp};

    fn item(id: i64, title: &str) -> Bookmark {
        let ts = Timestamp::from_secs(0);
        Bookmark {
            id,
            guid: format!("guid{}", id),
            title: title.to_string(),
            index: id,
            date_added: ts,
            last_modified: ts,
            kind: KIND_BOOKMARK.to_string(),
            root: String::new(),
            annotation: None,
            children: None,
            uri: format!("http://{}.example/", id),
            charset: String::new(),
            icon_uri: String::new(),
        }
    }

    #[test]
    fn test_format_html_structure() {
        let html = format_html(&[item(1, "One"), item(2, "Two")]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>bookmark-export</title>"));
        assert_eq!(html.matches("<table>").count(), 1);
        assert_eq!(html.matches("</table>").count(), 1);
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<th>").count(), 10);
        assert_eq!(html.matches("<td>").count(), 20);
    }

    #[test]
    fn test_format_html_header_labels_in_order() {
        let html = format_html(&[]);
        let header: String = COLUMNS.iter().map(|c| format!("<th>{}</th>", c)).collect();
        assert!(html.contains(&format!("<tr>{}</tr>", header)));
        assert_eq!(html.matches("<tr>").count(), 1);
    }

    #[test]
    fn test_format_html_row_cells_in_order() {
        let html = format_html(&[item(3, "Three")]);
        assert!(html.contains(
            "<tr><td>3</td><td>guid3</td><td>Three</td><td>3</td>\
             <td>1970-01-01 00:00:00 UTC</td><td>1970-01-01 00:00:00 UTC</td>\
             <td></td><td>text/x-moz-place</td><td>http://3.example/</td><td></td></tr>"
        ));
    }

    #[test]
    fn test_format_html_raw_values_by_default() {
        let html = format_html(&[item(1, "<b>bold</b> & co")]);
        assert!(html.contains("<td><b>bold</b> & co</td>"));
    }

    #[test]
    fn test_format_html_escapes_when_enabled() {
        let options = HtmlOptions { escape: true, ..HtmlOptions::default() };
        let html = format_html_with(&[item(1, "<b>\"x\" & 'y'</b>")], &options);
        assert!(html.contains("<td>&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;</td>"));
    }

    #[test]
    fn test_format_html_custom_title() {
        let options = HtmlOptions { title: "My <Bookmarks>".to_string(), escape: false };
        let html = format_html_with(&[], &options);
        assert!(html.contains("<title>My &lt;Bookmarks&gt;</title>"));
    }

    #[test]
    fn test_escape_html_borrows_clean_text() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
        assert_eq!(escape_html("a<b"), "a&lt;b");
    }
}
