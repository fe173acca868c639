//! CSS custom properties

use std::fmt::Write;

use crate::source::references;
use crate::token::{kebab_case, TokenSet};

fn var_name(dotted: &str) -> String {
    dotted.split('.').map(kebab_case).collect::<Vec<_>>().join("-")
}

/// Render every token as a custom property inside `selector`.
///
/// Aliased tokens keep their reference as `var(--...)` instead of the
/// resolved value.
pub fn render_css_variables(set: &TokenSet, selector: &str) -> String {
    let mut out = String::from("/**\n * Do not edit directly, this file was auto-generated.\n */\n\n");
    let _ = writeln!(out, "{selector} {{");
    for token in set.tokens() {
        let value = if token.is_reference() {
            let mut value = token.original.clone();
            for reference in references(&token.original) {
                value = value.replace(
                    &format!("{{{reference}}}"),
                    &format!("var(--{})", var_name(reference)),
                );
            }
            value
        } else {
            token.value.clone()
        };
        let _ = writeln!(out, "  --{}: {};", token.name(), value);
    }
    out.push_str("}\n");
    out
}
