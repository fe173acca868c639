//! Token source loading
//!
//! Source files are JSON objects whose leaves look like `{ "value": "#006C51" }`.
//! A [`TokenSource`] reads a layered list of files, deep-merges them (later
//! layers win), flattens the tree into tokens, and resolves `{path.to.token}`
//! aliases.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::{Map, Value};
use walkdir::WalkDir;

use crate::error::{Result, TokenError};
use crate::token::{ResolvedToken, TokenSet};

#[derive(Clone, Debug)]
enum Layer {
    File(PathBuf),
    Dir(PathBuf),
    Inline(Value),
}

/// Layered list of token sources
#[derive(Clone, Debug, Default)]
pub struct TokenSource {
    layers: Vec<Layer>,
}

impl TokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single JSON file
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.layers.push(Layer::File(path.into()));
        self
    }

    /// Add every `*.json` file under a directory, in sorted path order
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.layers.push(Layer::Dir(path.into()));
        self
    }

    /// Add an already-parsed token tree
    pub fn with_json(mut self, tree: Value) -> Self {
        self.layers.push(Layer::Inline(tree));
        self
    }

    /// Read, merge, flatten, and resolve every layer
    pub fn load(&self) -> Result<TokenSet> {
        let mut merged = Map::new();
        for layer in &self.layers {
            match layer {
                Layer::File(path) => merge_into(&mut merged, read_json(path)?),
                Layer::Dir(dir) => {
                    for path in json_files(dir)? {
                        merge_into(&mut merged, read_json(&path)?);
                    }
                }
                Layer::Inline(tree) => merge_into(&mut merged, tree.clone()),
            }
        }

        let mut raw = Vec::new();
        flatten(&merged, &mut Vec::new(), &mut raw)?;
        let set = resolve(raw)?;
        tracing::debug!(
            "loaded {} tokens from {} layers",
            set.len(),
            self.layers.len()
        );
        Ok(set)
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| TokenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TokenError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|err| TokenError::Io {
            path: dir.to_path_buf(),
            source: err.into(),
        })?;
        let path = entry.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if entry.file_type().is_file() && is_json {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn is_leaf(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.contains_key("value"))
}

/// Deep-merge `overlay` into `base`. Groups merge key by key; leaves and
/// mismatched shapes are replaced. Existing keys keep their position.
fn merge_into(base: &mut Map<String, Value>, overlay: Value) {
    let Value::Object(overlay) = overlay else {
        return;
    };
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(Value::Object(existing))
                if value.is_object() && !is_leaf(&value) && !existing.contains_key("value") =>
            {
                merge_into(existing, value);
            }
            _ => {
                base.insert(key, value);
            }
        }
    }
}

fn flatten(
    group: &Map<String, Value>,
    prefix: &mut Vec<String>,
    out: &mut Vec<(Vec<String>, String)>,
) -> Result<()> {
    for (key, node) in group {
        prefix.push(key.clone());
        if let Some(leaf) = node.as_object().and_then(|obj| obj.get("value")) {
            let value = match leaf {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(TokenError::UnsupportedValue {
                        path: prefix.join("."),
                        found: other.to_string(),
                    })
                }
            };
            out.push((prefix.clone(), value));
        } else if let Value::Object(child) = node {
            flatten(child, prefix, out)?;
        }
        prefix.pop();
    }
    Ok(())
}

fn resolve(raw: Vec<(Vec<String>, String)>) -> Result<TokenSet> {
    let lookup: FxHashMap<String, &str> = raw
        .iter()
        .map(|(path, value)| (path.join("."), value.as_str()))
        .collect();

    let mut resolver = Resolver {
        lookup: &lookup,
        done: FxHashMap::default(),
    };

    let mut tokens = Vec::with_capacity(raw.len());
    for (path, original) in &raw {
        let dotted = path.join(".");
        let value = resolver.resolve(&dotted, &mut Vec::new())?;
        tokens.push(
            ResolvedToken::new(path.iter().cloned(), value).with_original(original.clone()),
        );
    }
    Ok(TokenSet::new(tokens))
}

struct Resolver<'a> {
    lookup: &'a FxHashMap<String, &'a str>,
    done: FxHashMap<String, String>,
}

impl Resolver<'_> {
    fn resolve(&mut self, path: &str, chain: &mut Vec<String>) -> Result<String> {
        if let Some(value) = self.done.get(path) {
            return Ok(value.clone());
        }
        if chain.iter().any(|p| p == path) {
            let mut cycle = chain.clone();
            cycle.push(path.to_string());
            return Err(TokenError::CircularReference { chain: cycle });
        }

        let raw = self.lookup[path];
        chain.push(path.to_string());

        let mut resolved = String::with_capacity(raw.len());
        let mut rest = raw;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            let reference = &rest[open + 1..open + close];
            resolved.push_str(&rest[..open]);
            if !self.lookup.contains_key(reference) {
                return Err(TokenError::UnknownReference {
                    path: path.to_string(),
                    reference: reference.to_string(),
                });
            }
            resolved.push_str(&self.resolve(reference, chain)?);
            rest = &rest[open + close + 1..];
        }
        resolved.push_str(rest);

        chain.pop();
        self.done.insert(path.to_string(), resolved.clone());
        Ok(resolved)
    }
}

/// Dotted paths referenced by an authored value, in order of appearance
pub fn references(original: &str) -> Vec<&str> {
    let mut refs = Vec::new();
    let mut seen = FxHashSet::default();
    let mut rest = original;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        let reference = &rest[open + 1..open + close];
        if seen.insert(reference) {
            refs.push(reference);
        }
        rest = &rest[open + close + 1..];
    }
    refs
}
