//! Resolved token model
//!
//! A [`ResolvedToken`] is one named design value after source merging and
//! alias resolution. Renderers only ever see these; the raw source files stay
//! inside [`crate::source`].

use rustc_hash::FxHashMap;

use crate::bucket::CategoryBucket;

/// A single design value with its fully-resolved string value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedToken {
    /// Path segments; the first names the category (`color`, `palette`, `spacing`, ...)
    pub path: Vec<String>,
    /// Resolved value, opaque to every renderer
    pub value: String,
    /// Value as authored, before aliases were substituted
    pub original: String,
}

impl ResolvedToken {
    /// Create a token whose authored value equals its resolved value
    pub fn new<I, S>(path: I, value: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let value = value.into();
        Self {
            path: path.into_iter().map(Into::into).collect(),
            original: value.clone(),
            value,
        }
    }

    /// Attach the authored (pre-resolution) value
    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original = original.into();
        self
    }

    /// First path segment, if any
    pub fn category(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Dotted path, e.g. `palette.primary.40`
    pub fn dotted(&self) -> String {
        self.path.join(".")
    }

    /// Kebab-cased variable name, e.g. `color-on-primary`
    pub fn name(&self) -> String {
        self.path
            .iter()
            .map(|segment| kebab_case(segment))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Whether the authored value was an alias of another token
    pub fn is_reference(&self) -> bool {
        self.original != self.value && self.original.contains('{')
    }
}

/// Convert a camelCase path segment to kebab-case.
pub(crate) fn kebab_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in segment.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else if ch == '_' || ch == ' ' {
            out.push('-');
            prev_lower_or_digit = false;
        } else {
            out.push(ch);
            prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

/// The ordered output of one resolution pass
///
/// Paths are unique. When built from a list with duplicate paths the last
/// value wins and the token keeps the position of its first occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<ResolvedToken>,
}

impl TokenSet {
    pub fn new(tokens: impl IntoIterator<Item = ResolvedToken>) -> Self {
        let mut index: FxHashMap<Vec<String>, usize> = FxHashMap::default();
        let mut out: Vec<ResolvedToken> = Vec::new();
        for token in tokens {
            match index.get(&token.path) {
                Some(&i) => {
                    tracing::trace!("token {} redefined, last value wins", token.dotted());
                    out[i] = token;
                }
                None => {
                    index.insert(token.path.clone(), out.len());
                    out.push(token);
                }
            }
        }
        Self { tokens: out }
    }

    pub fn tokens(&self) -> &[ResolvedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Bucket the tokens by category
    pub fn bucket(&self) -> CategoryBucket {
        CategoryBucket::extract(&self.tokens)
    }
}

impl FromIterator<ResolvedToken> for TokenSet {
    fn from_iter<T: IntoIterator<Item = ResolvedToken>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_names() {
        assert_eq!(
            ResolvedToken::new(["color", "onPrimary"], "#fff").name(),
            "color-on-primary"
        );
        assert_eq!(
            ResolvedToken::new(["palette", "neutralVariant", "40"], "#444").name(),
            "palette-neutral-variant-40"
        );
        assert_eq!(
            ResolvedToken::new(["fontSize", "2xl"], "1.5rem").name(),
            "font-size-2xl"
        );
    }

    #[test]
    fn duplicate_paths_keep_first_position_and_last_value() {
        let set = TokenSet::new([
            ResolvedToken::new(["color", "primary"], "#111111"),
            ResolvedToken::new(["spacing", "4"], "1rem"),
            ResolvedToken::new(["color", "primary"], "#222222"),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.tokens()[0].value, "#222222");
        assert_eq!(set.tokens()[1].dotted(), "spacing.4");
    }

    #[test]
    fn reference_detection() {
        let token = ResolvedToken::new(["color", "primary"], "#006C51")
            .with_original("{palette.primary.40}");
        assert!(token.is_reference());
        assert!(!ResolvedToken::new(["color", "primary"], "#006C51").is_reference());
    }
}
