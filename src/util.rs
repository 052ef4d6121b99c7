/// Small shared helpers

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Whether a JSON value carries no own enumerable keys
///
/// Mirrors a for..in own-property check: `{}` and `null` are empty, an
/// object or array with at least one entry is not, and scalars carry no
/// enumerable keys at all.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => true,
    }
}

/// Join a slash-separated sub path onto a base path segment by segment
///
/// Config files store relative paths with forward slashes regardless of
/// platform; joining segment-wise keeps Windows separators correct.
pub fn join_slash_path(base: &Path, sub_path: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for segment in sub_path.split('/').filter(|s| !s.is_empty()) {
        path = path.join(segment);
    }
    path
}
