//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

const KIND_CONTAINER: &str = "text/x-moz-place-container";
const KIND_BOOKMARK: &str = "text/x-moz-place";
const KIND_SEPARATOR: &str = "text/x-moz-place-separator";

/// Builder for a single node of a bookmarks backup
#[derive(Clone)]
pub struct NodeBuilder {
    value: Value,
}

impl NodeBuilder {
    /// A bookmark item with the given id and URI
    pub fn bookmark(id: i64, uri: &str) -> Self {
        Self {
            value: json!({
                "id": id,
                "guid": format!("item{:08}", id),
                "title": format!("Bookmark {}", id),
                "index": 0,
                "dateAdded": 1_500_000_000 + id,
                "lastModified": 1_500_000_000 + id,
                "type": KIND_BOOKMARK,
                "uri": uri,
            }),
        }
    }

    /// A folder holding the given children, in order
    pub fn folder(id: i64, title: &str, children: Vec<NodeBuilder>) -> Self {
        let children: Vec<Value> = children
            .into_iter()
            .enumerate()
            .map(|(i, mut child)| {
                child.value["index"] = json!(i);
                child.value
            })
            .collect();
        Self {
            value: json!({
                "id": id,
                "guid": format!("fold{:08}", id),
                "title": title,
                "index": 0,
                "dateAdded": 1_400_000_000,
                "lastModified": 1_400_000_000,
                "type": KIND_CONTAINER,
                "children": children,
            }),
        }
    }

    pub fn separator(id: i64) -> Self {
        Self {
            value: json!({
                "id": id,
                "guid": format!("sepr{:08}", id),
                "title": "",
                "index": 0,
                "dateAdded": 1_400_000_000,
                "lastModified": 1_400_000_000,
                "type": KIND_SEPARATOR,
            }),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.value["title"] = json!(title);
        self
    }

    pub fn field(mut self, name: &str, value: Value) -> Self {
        self.value[name] = value;
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        if let Some(obj) = self.value.as_object_mut() {
            obj.remove(name);
        }
        self
    }

    pub fn to_json(&self) -> String {
        self.value.to_string()
    }
}

/// Root node (`placesRoot`) holding the given children
pub fn places_root(children: Vec<NodeBuilder>) -> NodeBuilder {
    NodeBuilder::folder(1, "", children).field("root", json!("placesRoot"))
}

/// The standard four Firefox root folders, with `menu` holding the given children
pub fn firefox_backup(menu: Vec<NodeBuilder>) -> NodeBuilder {
    places_root(vec![
        NodeBuilder::folder(2, "menu", menu).field("root", json!("bookmarksMenuFolder")),
        NodeBuilder::folder(3, "toolbar", vec![]).field("root", json!("toolbarFolder")),
        NodeBuilder::folder(4, "unfiled", vec![]).field("root", json!("unfiledBookmarksFolder")),
        NodeBuilder::folder(5, "mobile", vec![]).field("root", json!("mobileFolder")),
    ])
}

/// Temp directory holding a bookmarks file
pub struct BackupDir {
    temp_dir: TempDir,
}

impl BackupDir {
    pub fn with_json(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("bookmarks.json"), content)
            .expect("Failed to write bookmarks.json");
        Self { temp_dir }
    }

    pub fn with_tree(root: &NodeBuilder) -> Self {
        Self::with_json(&root.to_json())
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn input(&self) -> PathBuf {
        self.temp_dir.path().join("bookmarks.json")
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}
