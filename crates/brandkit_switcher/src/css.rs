//! CSS custom property access on the presentation root

use crate::host::PresentationRoot;

/// Read a custom property, trimmed. Empty when unset.
pub fn get_css_var(root: &dyn PresentationRoot, name: &str) -> String {
    root.style_property(name)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Set a custom property on the root.
pub fn set_css_var(root: &dyn PresentationRoot, name: &str, value: &str) {
    root.set_style_property(name, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryRoot, NoopRoot};

    #[test]
    fn round_trips_and_trims() {
        let root = MemoryRoot::new();
        set_css_var(&root, "--color-primary", "  #006C51 ");
        assert_eq!(get_css_var(&root, "--color-primary"), "#006C51");
        assert_eq!(get_css_var(&root, "--color-missing"), "");
    }

    #[test]
    fn noop_root_reads_empty() {
        set_css_var(&NoopRoot, "--x", "1");
        assert_eq!(get_css_var(&NoopRoot, "--x"), "");
    }
}
