//! Project creation and scaffolding

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::BrandkitConfig;

/// Create a new token project with a minimal source tree for both brands
pub fn create_project(path: &Path, name: &str) -> Result<()> {
    let config = BrandkitConfig::new(name);
    let tokens = path.join(&config.sources.root);

    // Create directory structure
    fs::create_dir_all(tokens.join("core"))?;
    fs::create_dir_all(tokens.join("external"))?;
    fs::create_dir_all(tokens.join("internal"))?;

    fs::write(path.join("brandkit.toml"), config.to_toml()?)?;

    fs::write(tokens.join("core/spacing.json"), CORE_SPACING)?;
    fs::write(tokens.join("core/typography.json"), CORE_TYPOGRAPHY)?;
    fs::write(tokens.join("core/radius.json"), CORE_RADIUS)?;

    fs::write(tokens.join("external/colors.json"), EXTERNAL_COLORS)?;
    fs::write(tokens.join("external/semantic.light.json"), EXTERNAL_LIGHT)?;
    fs::write(tokens.join("external/semantic.dark.json"), EXTERNAL_DARK)?;

    fs::write(tokens.join("internal/colors.json"), INTERNAL_COLORS)?;
    fs::write(tokens.join("internal/semantic.light.json"), INTERNAL_LIGHT)?;
    fs::write(tokens.join("internal/semantic.dark.json"), INTERNAL_DARK)?;

    // Create .gitignore
    fs::write(
        path.join(".gitignore"),
        format!(
            r#"# Brandkit build artifacts
/{}/

# OS
.DS_Store
Thumbs.db
"#,
            config.build.output
        ),
    )?;

    tracing::info!("Created {} at {}", name, path.display());
    Ok(())
}

const CORE_SPACING: &str = r#"{
  "spacing": {
    "0": { "value": "0" },
    "1": { "value": "0.25rem" },
    "2": { "value": "0.5rem" },
    "4": { "value": "1rem" },
    "8": { "value": "2rem" }
  }
}
"#;

const CORE_TYPOGRAPHY: &str = r#"{
  "fontFamily": {
    "sans": { "value": "Inter, system-ui, -apple-system, sans-serif" },
    "mono": { "value": "JetBrains Mono, ui-monospace, monospace" }
  },
  "fontSize": {
    "sm": { "value": "0.875rem" },
    "base": { "value": "1rem" },
    "lg": { "value": "1.125rem" }
  }
}
"#;

const CORE_RADIUS: &str = r#"{
  "radius": {
    "sm": { "value": "4px" },
    "md": { "value": "8px" },
    "lg": { "value": "12px" },
    "full": { "value": "9999px" }
  }
}
"#;

const EXTERNAL_COLORS: &str = r##"{
  "palette": {
    "primary": {
      "40": { "value": "#006C51" },
      "80": { "value": "#6FDBB4" },
      "90": { "value": "#8CF8D0" }
    },
    "neutral": {
      "10": { "value": "#191C1B" },
      "99": { "value": "#FBFDF9" }
    }
  }
}
"##;

const EXTERNAL_LIGHT: &str = r##"{
  "color": {
    "primary": { "value": "{palette.primary.40}" },
    "onPrimary": { "value": "#FFFFFF" },
    "background": { "value": "{palette.neutral.99}" },
    "onBackground": { "value": "{palette.neutral.10}" }
  }
}
"##;

const EXTERNAL_DARK: &str = r##"{
  "color": {
    "primary": { "value": "{palette.primary.80}" },
    "onPrimary": { "value": "#003829" },
    "background": { "value": "{palette.neutral.10}" },
    "onBackground": { "value": "{palette.neutral.99}" }
  }
}
"##;

const INTERNAL_COLORS: &str = r##"{
  "palette": {
    "brand": {
      "400": { "value": "#a78bfa" },
      "600": { "value": "#7c3aed" },
      "700": { "value": "#6d28d9" }
    },
    "accent": {
      "400": { "value": "#22d3ee" }
    }
  }
}
"##;

const INTERNAL_LIGHT: &str = r##"{
  "color": {
    "primary": { "value": "{palette.brand.600}" },
    "primaryLight": { "value": "{palette.brand.400}" },
    "primaryDark": { "value": "{palette.brand.700}" },
    "accent": { "value": "{palette.accent.400}" },
    "background": { "value": "#FFFFFF" },
    "text": { "value": "#0F172A" }
  }
}
"##;

const INTERNAL_DARK: &str = r##"{
  "color": {
    "primary": { "value": "{palette.brand.400}" },
    "primaryLight": { "value": "{palette.brand.400}" },
    "primaryDark": { "value": "{palette.brand.600}" },
    "accent": { "value": "{palette.accent.400}" },
    "background": { "value": "#0F172A" },
    "text": { "value": "#F8FAFC" }
  }
}
"##;
