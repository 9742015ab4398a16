use std::collections::HashSet;

use tracing::debug;

use crate::models::Bookmark;

/// Drop every item whose `uri` was already seen earlier in `items`
///
/// The first occurrence wins and relative order is preserved. URIs are compared
/// byte-for-byte with no normalization.
///
/// Node kind is ignored: folders and separators all have an empty `uri` and collapse
/// into the first of them, so pass leaf items only (e.g. from [`Bookmark::leaves`]).
///
/// # Examples
///
/// ```
/// use bookmark_export::remove_duplicates;
///
/// assert!(remove_duplicates(&[]).is_empty());
/// ```
pub fn remove_duplicates(items: &[Bookmark]) -> Vec<Bookmark> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    let kept: Vec<Bookmark> =
        items.iter().filter(|item| seen.insert(item.uri.as_str())).cloned().collect();

    debug!(input = items.len(), kept = kept.len(), "removed duplicate bookmarks");
    kept
}

/// Number of items [`remove_duplicates`] would drop
pub fn count_duplicates<'a>(items: impl IntoIterator<Item = &'a Bookmark>) -> usize {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| !seen.insert(item.uri.as_str())).count()
}
