//! Tailwind preset module

use serde_json::{Map, Value};

use crate::bucket::{CategoryBucket, ColorNode, ColorTree, ScalarMap};

pub(crate) fn color_tree_value(tree: &ColorTree) -> Value {
    Value::Object(
        tree.iter()
            .map(|(key, node)| {
                let value = match node {
                    ColorNode::Leaf(v) => Value::String(v.clone()),
                    ColorNode::Branch(child) => color_tree_value(child),
                };
                (key.clone(), value)
            })
            .collect(),
    )
}

pub(crate) fn scalar_value(map: &ScalarMap) -> Value {
    Value::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

/// Render `{ theme: { extend: { ... } } }` as a CommonJS module.
///
/// `colors` is always present; empty scalar categories are left out of
/// `extend` entirely. `radius` is emitted as `borderRadius`.
pub fn render_tailwind_preset(bucket: &CategoryBucket) -> String {
    let mut extend = Map::new();
    extend.insert("colors".into(), color_tree_value(&bucket.colors));
    for (key, map) in [
        ("spacing", &bucket.spacing),
        ("fontSize", &bucket.font_size),
        ("fontFamily", &bucket.font_family),
        ("borderRadius", &bucket.radius),
    ] {
        if !map.is_empty() {
            extend.insert(key.into(), scalar_value(map));
        }
    }

    let mut theme = Map::new();
    theme.insert("extend".into(), Value::Object(extend));
    let mut preset = Map::new();
    preset.insert("theme".into(), Value::Object(theme));

    format!(
        "/** @type {{import('tailwindcss').Config}} */\nmodule.exports = {:#};\n",
        Value::Object(preset)
    )
}
