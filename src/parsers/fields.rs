//! Typed field access on JSON objects, reporting the node path on failure

use serde_json::{Map, Value};

use crate::error::{BookmarkError, Result};
use crate::models::Timestamp;

pub(crate) type Object = Map<String, Value>;

pub(crate) fn required<'a>(obj: &'a Object, path: &str, field: &str) -> Result<&'a Value> {
    obj.get(field).ok_or_else(|| BookmarkError::malformed(path, field, "is missing"))
}

pub(crate) fn required_i64(obj: &Object, path: &str, field: &str) -> Result<i64> {
    required(obj, path, field)?
        .as_i64()
        .ok_or_else(|| BookmarkError::malformed(path, field, "must be an integer"))
}

pub(crate) fn required_str(obj: &Object, path: &str, field: &str) -> Result<String> {
    required(obj, path, field)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| BookmarkError::malformed(path, field, "must be a string"))
}

/// Absent or `null` reads as an empty string; any other non-string is an error
pub(crate) fn optional_str(obj: &Object, path: &str, field: &str) -> Result<String> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(BookmarkError::malformed(path, field, "must be a string")),
    }
}

/// Reads a seconds-since-epoch field; any integer is accepted
pub(crate) fn required_timestamp(obj: &Object, path: &str, field: &str) -> Result<Timestamp> {
    required_i64(obj, path, field).map(Timestamp::from_secs)
}
