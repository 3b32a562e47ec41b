//! Dot-separated key path resolution over parsed JSON.

use serde_json::Value;

/// Resolves `path` against `root`, one dot-separated segment at a time.
///
/// A segment steps into an object by key; a segment that parses as an index
/// steps into an array. Returns `None` at the first segment that cannot be
/// resolved.
pub(crate) fn lookup<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(root, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::lookup;

    #[test]
    fn test_object_traversal() {
        let root = json!({"user": {"name": "ada"}});
        assert_eq!(lookup(&root, "user.name"), Some(&json!("ada")));
        assert_eq!(lookup(&root, "user"), Some(&json!({"name": "ada"})));
    }

    #[test]
    fn test_array_index_traversal() {
        let root = json!({"items": [10, 20, 30]});
        assert_eq!(lookup(&root, "items.1"), Some(&json!(20)));
        assert_eq!(lookup(&root, "items.3"), None);
        assert_eq!(lookup(&root, "items.one"), None);
    }

    #[test]
    fn test_missing_segments() {
        let root = json!({"user": {"name": "ada"}});
        assert_eq!(lookup(&root, "user.age"), None);
        assert_eq!(lookup(&root, "account"), None);
        assert_eq!(lookup(&root, "user.name.first"), None);
    }
}
