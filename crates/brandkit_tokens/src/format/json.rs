//! Nested JSON token dump

use serde_json::{Map, Value};

use crate::token::TokenSet;

/// Rebuild the token paths into a nested object of values.
pub fn render_json_nested(set: &TokenSet) -> String {
    let mut root = Map::new();
    for token in set.tokens() {
        if let Some((last, branches)) = token.path.split_last() {
            insert_path(&mut root, branches, last, &token.value);
        }
    }
    format!("{:#}\n", Value::Object(root))
}

fn insert_path(
    root: &mut Map<String, Value>,
    branches: &[String],
    last: &str,
    value: &str,
) {
    let mut current = root;
    for segment in branches {
        let entry = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Some(next) = entry.as_object_mut() else {
            return;
        };
        current = next;
    }
    current.insert(last.to_string(), Value::String(value.to_string()));
}
