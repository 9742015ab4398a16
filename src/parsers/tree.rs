use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::fields::{
    Object, optional_str, required, required_i64, required_str, required_timestamp,
};
use crate::error::{BookmarkError, Result};
use crate::models::{Annotation, Bookmark, KIND_CONTAINER, KIND_SEPARATOR};
use crate::utils::read_file;

/// Parse a Firefox bookmarks backup into its root node
///
/// Folders may nest to any depth: the document is read without a nesting limit and the
/// tree is built with an explicit stack.
/// Sibling order is kept exactly as in the source arrays.
///
/// # Errors
///
/// - [`BookmarkError::Json`] if the text is not JSON
/// - [`BookmarkError::MalformedInput`] if any node lacks a required field. The root must also
///   carry `root` and `children`; bookmark items must carry `uri`.
///
/// No partial tree is ever returned.
///
/// # Examples
///
/// ```
/// use bookmark_export::parse;
///
/// let json = r#"{"id":1,"guid":"root________","title":"","index":0,"dateAdded":0,
///     "lastModified":0,"type":"text/x-moz-place-container","root":"placesRoot","children":[]}"#;
/// let root = parse(json)?;
/// assert_eq!(root.root, "placesRoot");
/// assert!(root.children().is_empty());
/// # Ok::<(), bookmark_export::BookmarkError>(())
/// ```
pub fn parse(json_text: &str) -> Result<Bookmark> {
    let value = read_json(json_text)?;
    let root = build_tree(&value)?;
    debug!(nodes = root.node_count(), depth = root.depth(), "parsed bookmark tree");
    Ok(root)
}

/// Read and parse a bookmarks backup file, see [`parse`]
pub fn parse_file(path: &Path) -> Result<Bookmark> {
    let text = read_file(path)?;
    parse(&text)
}

/// Parses JSON without serde_json's nesting limit, growing the stack on demand
fn read_json(json_text: &str) -> Result<Value> {
    let mut de = serde_json::Deserializer::from_str(json_text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// A folder whose children are still being parsed
struct Frame<'a> {
    node: Bookmark,
    path: String,
    children: &'a [Value],
    built: Vec<Bookmark>,
}

impl<'a> Frame<'a> {
    fn new(node: Bookmark, path: String, children: &'a [Value]) -> Self {
        Self { node, path, children, built: Vec::with_capacity(children.len()) }
    }

    fn finish(self) -> Bookmark {
        let mut node = self.node;
        node.children = Some(self.built);
        node
    }
}

/// Depth-first build with an explicit stack, so nesting depth is bounded only by memory
fn build_tree(value: &Value) -> Result<Bookmark> {
    let (root, children) = parse_node(value, "$", true)?;
    let mut stack: Vec<Frame<'_>> = Vec::new();
    let mut current = Frame::new(root, "$".to_string(), children.unwrap_or(&[]));

    loop {
        if let Some(child) = current.children.get(current.built.len()) {
            let path = format!("{}.children[{}]", current.path, current.built.len());
            let (node, grandchildren) = parse_node(child, &path, false)?;
            match grandchildren {
                Some(grandchildren) => {
                    let folder = Frame::new(node, path, grandchildren);
                    stack.push(std::mem::replace(&mut current, folder));
                }
                None => current.built.push(node),
            }
            continue;
        }

        let folder = current.finish();
        match stack.pop() {
            Some(mut parent) => {
                parent.built.push(folder);
                current = parent;
            }
            None => return Ok(folder),
        }
    }
}

/// Reads one node's own fields. Returns the raw `children` array still to be parsed, if any.
fn parse_node<'a>(
    value: &'a Value,
    path: &str,
    is_root: bool,
) -> Result<(Bookmark, Option<&'a [Value]>)> {
    let obj = value
        .as_object()
        .ok_or_else(|| BookmarkError::malformed(path, "<node>", "must be an object"))?;

    let kind = required_str(obj, path, "type")?;
    let root =
        if is_root { required_str(obj, path, "root")? } else { optional_str(obj, path, "root")? };

    // Scalar fields come first so errors on a folder are reported before its children
    let mut node = Bookmark {
        id: required_i64(obj, path, "id")?,
        guid: required_str(obj, path, "guid")?,
        title: required_str(obj, path, "title")?,
        index: required_i64(obj, path, "index")?,
        date_added: required_timestamp(obj, path, "dateAdded")?,
        last_modified: required_timestamp(obj, path, "lastModified")?,
        kind,
        root,
        annotation: parse_annotation(obj, path)?,
        children: None,
        uri: String::new(),
        charset: String::new(),
        icon_uri: String::new(),
    };

    if is_root || obj.contains_key("children") {
        let children = required(obj, path, "children")?
            .as_array()
            .ok_or_else(|| BookmarkError::malformed(path, "children", "must be an array"))?;
        return Ok((node, Some(children.as_slice())));
    }

    if node.kind == KIND_CONTAINER {
        // Firefox omits `children` on empty folders
        node.children = Some(Vec::new());
    } else if node.kind != KIND_SEPARATOR {
        node.uri = required_str(obj, path, "uri")?;
        node.charset = optional_str(obj, path, "charset")?;
        node.icon_uri = optional_str(obj, path, "iconuri")?;
    }

    Ok((node, None))
}

/// Only the first element of `annos` is kept; an empty array means no annotation
fn parse_annotation(obj: &Object, path: &str) -> Result<Option<Annotation>> {
    let annos = match obj.get("annos") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(annos)) => annos,
        Some(_) => return Err(BookmarkError::malformed(path, "annos", "must be an array")),
    };

    let Some(first) = annos.first() else {
        return Ok(None);
    };

    let path = format!("{}.annos[0]", path);
    let anno = first
        .as_object()
        .ok_or_else(|| BookmarkError::malformed(&path, "<annotation>", "must be an object"))?;

    Ok(Some(Annotation {
        name: required_str(anno, &path, "name")?,
        flags: required_i64(anno, &path, "flags")?,
        expires: required_i64(anno, &path, "expires")?,
        value: required_str(anno, &path, "value")?,
    }))
}
