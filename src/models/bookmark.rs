use super::Timestamp;

/// `type` value Firefox uses for folders
pub const KIND_CONTAINER: &str = "text/x-moz-place-container";
/// `type` value Firefox uses for bookmark items
pub const KIND_BOOKMARK: &str = "text/x-moz-place";
/// `type` value Firefox uses for visual separators
pub const KIND_SEPARATOR: &str = "text/x-moz-place-separator";

/// Metadata record attached to a node through the `annos` array.
///
/// Only the first element of `annos` is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub flags: i64,
    pub expires: i64,
    pub value: String,
}

/// One node of a bookmarks export: a folder, a bookmark item, or a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: i64,
    pub guid: String,
    pub title: String,
    pub index: i64,
    pub date_added: Timestamp,
    pub last_modified: Timestamp,
    /// Source field `type`
    pub kind: String,
    /// Set on the top-level node and on the well-known root folders, empty elsewhere
    pub root: String,
    pub annotation: Option<Annotation>,
    /// `Some` for folders, in source order. `None` for items and separators.
    pub children: Option<Vec<Bookmark>>,
    pub uri: String,
    pub charset: String,
    pub icon_uri: String,
}

impl Bookmark {
    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    pub fn is_separator(&self) -> bool {
        self.kind == KIND_SEPARATOR
    }

    /// True for nodes that carry a URI (neither folder nor separator)
    pub fn is_leaf(&self) -> bool {
        !self.is_container() && !self.is_separator()
    }

    /// Direct children, empty for non-folders
    pub fn children(&self) -> &[Bookmark] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Pre-order iterator over this node and all of its descendants
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// All leaf items below (and including) this node, in pre-order
    pub fn leaves(&self) -> Vec<&Bookmark> {
        self.walk().filter(|node| node.is_leaf()).collect()
    }

    /// First folder in pre-order whose title matches exactly
    pub fn find_folder(&self, title: &str) -> Option<&Bookmark> {
        self.walk().find(|node| node.is_container() && node.title == title)
    }

    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Number of levels in the subtree; a lone node has depth 1
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children().iter().map(|child| (child, level + 1)));
        }
        deepest
    }
}

/// Pre-order traversal, see [`Bookmark::walk`]
pub struct Walk<'a> {
    stack: Vec<&'a Bookmark>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Bookmark;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is visited next
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
