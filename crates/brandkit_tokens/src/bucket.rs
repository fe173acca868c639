//! Palette/color extraction
//!
//! Walks a flat token list and groups it by category. Colors and palettes
//! share one nested tree; spacing, font sizes, font families, and radii are
//! flat maps keyed by the second path segment.
//!
//! Processing order is fixed: every `palette` token is applied before any
//! `color` token, each group in input order. A semantic `color.primary`
//! therefore replaces a `palette.primary` ramp in the merged tree, the same
//! outcome as loading brand palettes before the semantic overlay.

use indexmap::IndexMap;
use serde::Serialize;

use crate::token::ResolvedToken;

/// Flat key -> value map for a scalar category
pub type ScalarMap = IndexMap<String, String>;

/// Nested color tree keyed by path segment
pub type ColorTree = IndexMap<String, ColorNode>;

/// A node in the merged color tree
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorNode {
    Leaf(String),
    Branch(ColorTree),
}

impl ColorNode {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&ColorTree> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(tree) => Some(tree),
        }
    }
}

/// Scalar categories with a flat key map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarCategory {
    Spacing,
    FontSize,
    FontFamily,
    Radius,
}

impl ScalarCategory {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "spacing" => Some(Self::Spacing),
            "fontSize" => Some(Self::FontSize),
            "fontFamily" => Some(Self::FontFamily),
            "radius" => Some(Self::Radius),
            _ => None,
        }
    }
}

/// Tokens grouped by category
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryBucket {
    /// `color` and `palette` tokens merged into one tree, leading segment dropped
    pub colors: ColorTree,
    pub spacing: ScalarMap,
    pub font_size: ScalarMap,
    pub font_family: ScalarMap,
    pub radius: ScalarMap,
    /// Flat `color.<key>` view used for semantic role lookup
    pub semantic: ScalarMap,
    /// `palette.<name>.<tone>` view
    pub palettes: IndexMap<String, ScalarMap>,
}

impl CategoryBucket {
    /// Group `tokens` by category. Unknown categories and paths too short for
    /// their category are skipped.
    pub fn extract(tokens: &[ResolvedToken]) -> Self {
        let mut bucket = Self::default();

        let palettes = tokens.iter().filter(|t| t.category() == Some("palette"));
        let colors = tokens.iter().filter(|t| t.category() == Some("color"));
        for token in palettes.chain(colors) {
            bucket.insert_color(token);
        }

        for token in tokens {
            let Some(category) = token.category() else {
                continue;
            };
            if let Some(scalar) = ScalarCategory::from_segment(category) {
                let Some(key) = token.path.get(1) else {
                    tracing::trace!("skipping {}: no key segment", token.dotted());
                    continue;
                };
                bucket
                    .scalar_mut(scalar)
                    .insert(key.clone(), token.value.clone());
            } else if category != "color" && category != "palette" {
                tracing::trace!("skipping {}: unrecognized category", token.dotted());
            }
        }

        bucket
    }

    fn insert_color(&mut self, token: &ResolvedToken) {
        let segments = &token.path[1..];
        if segments.is_empty() {
            return;
        }
        insert_leaf(&mut self.colors, segments, &token.value);

        match token.category() {
            Some("color") => {
                self.semantic
                    .insert(segments[0].clone(), token.value.clone());
            }
            Some("palette") => {
                if let Some(tone) = segments.get(1) {
                    self.palettes
                        .entry(segments[0].clone())
                        .or_default()
                        .insert(tone.clone(), token.value.clone());
                }
            }
            _ => {}
        }
    }

    fn scalar_mut(&mut self, category: ScalarCategory) -> &mut ScalarMap {
        match category {
            ScalarCategory::Spacing => &mut self.spacing,
            ScalarCategory::FontSize => &mut self.font_size,
            ScalarCategory::FontFamily => &mut self.font_family,
            ScalarCategory::Radius => &mut self.radius,
        }
    }

    /// Look up a semantic color by its key (`primary`, `onPrimary`, ...)
    pub fn semantic_color(&self, key: &str) -> Option<&str> {
        self.semantic.get(key).map(String::as_str)
    }
}

/// Set `segments` to `value`, creating branches on demand. A leaf sitting
/// where a branch is needed is replaced.
fn insert_leaf(tree: &mut ColorTree, segments: &[String], value: &str) {
    let (last, branches) = match segments.split_last() {
        Some(split) => split,
        None => return,
    };

    let mut current = tree;
    for segment in branches {
        let node = current
            .entry(segment.clone())
            .or_insert_with(|| ColorNode::Branch(ColorTree::new()));
        if let ColorNode::Leaf(_) = node {
            *node = ColorNode::Branch(ColorTree::new());
        }
        let ColorNode::Branch(next) = node else {
            return;
        };
        current = next;
    }
    current.insert(last.clone(), ColorNode::Leaf(value.to_string()));
}
