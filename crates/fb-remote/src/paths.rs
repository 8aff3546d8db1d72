//! Dotted-path utilities for response envelopes.
//!
//! Remote endpoints rarely return a bare array; the data usually sits
//! under an envelope (`{"data": {"items": [...]}}`). These helpers
//! navigate dotted paths, locate the option array, and flatten a sample
//! item into the paths the property picker offers.

use fb_core::model::ChoiceOption;
use serde_json::Value;

/// Navigate a dotted path (`"data.items"`). An empty path returns the
/// value itself; a missing segment returns `None`.
pub fn value_at_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    let mut current = value;
    for part in path.split('.') {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Find the option array in a response body. The explicit path wins;
/// otherwise the body itself if it is an array; otherwise the first
/// array-valued top-level key.
pub fn locate_array<'a>(body: &'a Value, response_path: &str) -> Option<&'a Vec<Value>> {
    let target = if response_path.is_empty() {
        body
    } else {
        value_at_path(body, response_path)?
    };

    if let Value::Array(items) = target {
        return Some(items);
    }
    if let Value::Object(map) = target {
        return map.values().find_map(|v| v.as_array());
    }
    None
}

/// Dotted paths to every leaf of one sample item. Scalars and arrays are
/// leaves; nested objects recurse. A non-object item has no paths.
pub fn leaf_paths(item: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    if let Value::Object(map) = item {
        for (key, value) in map {
            collect_leaves(value, key, &mut paths);
        }
    }
    paths
}

fn collect_leaves(value: &Value, path: &str, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect_leaves(child, &format!("{path}.{key}"), out);
            }
        }
        _ => out.push(path.to_string()),
    }
}

/// Map response items to options using dotted label/value paths. A
/// missing label renders empty; a missing value becomes the empty string
/// so the option stays selectable.
pub fn map_options(items: &[Value], label_key: &str, value_key: &str) -> Vec<ChoiceOption> {
    items
        .iter()
        .map(|item| {
            let label = match value_at_path(item, label_key) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            let value = value_at_path(item, value_key)
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()));
            ChoiceOption { label, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn dotted_lookup() {
        let body = json!({"data": {"items": [1, 2], "meta": {"count": 2}}});
        assert_eq!(value_at_path(&body, "data.meta.count"), Some(&json!(2)));
        assert_eq!(value_at_path(&body, ""), Some(&body));
        assert_eq!(value_at_path(&body, "data.missing"), None);
        assert_eq!(value_at_path(&body, "data.items.0"), None);
    }

    #[test]
    fn locate_array_prefers_the_explicit_path() {
        let body = json!({"junk": [0], "data": {"items": [{"id": 1}]}});
        let items = locate_array(&body, "data.items").unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn locate_array_accepts_a_bare_array_body() {
        let body = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(locate_array(&body, "").unwrap().len(), 2);
    }

    #[test]
    fn locate_array_falls_back_to_first_array_key() {
        let body = json!({"total": 1, "results": [{"id": 7}]});
        let items = locate_array(&body, "").unwrap();
        assert_eq!(items[0], json!({"id": 7}));
        assert_eq!(locate_array(&json!({"total": 1}), ""), None);
    }

    #[test]
    fn leaf_paths_flatten_nested_objects() {
        let item = json!({
            "id": 7,
            "name": {"first": "Ada", "last": "Lovelace"},
            "tags": ["a", "b"]
        });
        let mut paths = leaf_paths(&item);
        paths.sort();
        assert_eq!(paths, vec!["id", "name.first", "name.last", "tags"]);
        assert!(leaf_paths(&json!("scalar")).is_empty());
    }

    #[test]
    fn map_options_spec_example() {
        let body = json!({"data": {"items": [{"name": "A", "id": 1}]}});
        let items = locate_array(&body, "data.items").unwrap();
        let options = map_options(items, "name", "id");
        assert_eq!(options, vec![ChoiceOption::new("A", 1)]);
    }

    #[test]
    fn map_options_tolerates_missing_keys() {
        let items = vec![json!({"title": "Only title"})];
        let options = map_options(&items, "title", "code");
        assert_eq!(options[0].label, "Only title");
        assert_eq!(options[0].value, json!(""));

        let options = map_options(&items, "nope", "title");
        assert_eq!(options[0].label, "");
        assert_eq!(options[0].value, json!("Only title"));
    }

    #[test]
    fn map_options_stringifies_non_string_labels() {
        let items = vec![json!({"n": 42, "ok": true})];
        let options = map_options(&items, "n", "ok");
        assert_eq!(options[0].label, "42");
        assert_eq!(options[0].value, json!(true));
    }
}
