//! MUI theme modules

use serde_json::Value;

use crate::brand::{Brand, ThemeConfig};
use crate::bucket::CategoryBucket;

use super::tailwind::scalar_value;

/// Semantic UI roles filled from the flat color map
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Brand colors
    PrimaryMain,
    PrimaryLight,
    PrimaryDark,
    PrimaryContrast,
    SecondaryMain,
    SecondaryContrast,

    // Surfaces
    BackgroundDefault,
    BackgroundPaper,

    // Text
    TextPrimary,
    TextSecondary,

    // Status colors
    ErrorMain,
    ErrorContrast,
    WarningMain,
    WarningContrast,
    SuccessMain,
    SuccessContrast,
    InfoMain,
    InfoContrast,

    Divider,
}

/// Token keys tried in order, then the literal for the brand
struct RoleSource {
    keys: &'static [&'static str],
    external: &'static str,
    internal: &'static str,
}

const fn src(
    keys: &'static [&'static str],
    external: &'static str,
    internal: &'static str,
) -> RoleSource {
    RoleSource {
        keys,
        external,
        internal,
    }
}

impl ColorRole {
    pub fn all() -> &'static [ColorRole] {
        use ColorRole::*;
        const ROLES: [ColorRole; 19] = [
            PrimaryMain,
            PrimaryLight,
            PrimaryDark,
            PrimaryContrast,
            SecondaryMain,
            SecondaryContrast,
            BackgroundDefault,
            BackgroundPaper,
            TextPrimary,
            TextSecondary,
            ErrorMain,
            ErrorContrast,
            WarningMain,
            WarningContrast,
            SuccessMain,
            SuccessContrast,
            InfoMain,
            InfoContrast,
            Divider,
        ];
        &ROLES
    }

    // Fallback literals are not derived from the brand token files and can
    // drift from them.
    fn source(self) -> RoleSource {
        match self {
            Self::PrimaryMain => src(&["primary"], "#006C51", "#7c3aed"),
            Self::PrimaryLight => src(&["primaryLight"], "#25A37F", "#a78bfa"),
            Self::PrimaryDark => src(&["primaryDark"], "#00513D", "#6d28d9"),
            Self::PrimaryContrast => src(&["onPrimary"], "#FFFFFF", "#FFFFFF"),
            Self::SecondaryMain => src(&["secondary", "accent"], "#4C6359", "#22d3ee"),
            Self::SecondaryContrast => src(&["onSecondary", "onAccent"], "#FFFFFF", "#FFFFFF"),
            Self::BackgroundDefault => src(&["background"], "#FBFDF9", "#FBFDF9"),
            Self::BackgroundPaper => src(&["surface", "surfaceContainer"], "#EFF1EE", "#EFF1EE"),
            Self::TextPrimary => src(&["onBackground", "text"], "#2C322F", "#2C322F"),
            Self::TextSecondary => {
                src(&["onSurfaceVariant", "textSecondary"], "#5C5F5D", "#5C5F5D")
            }
            Self::ErrorMain => src(&["error"], "#BA1A1A", "#BA1A1A"),
            Self::ErrorContrast => src(&["onError"], "#FFFFFF", "#FFFFFF"),
            Self::WarningMain => src(&["warning"], "#F57C00", "#F57C00"),
            Self::WarningContrast => src(&["onWarning"], "#FFFFFF", "#FFFFFF"),
            Self::SuccessMain => src(&["success"], "#2E7D32", "#2E7D32"),
            Self::SuccessContrast => src(&["onSuccess"], "#FFFFFF", "#FFFFFF"),
            Self::InfoMain => src(&["info"], "#1976D2", "#1976D2"),
            Self::InfoContrast => src(&["onInfo"], "#FFFFFF", "#FFFFFF"),
            Self::Divider => src(&["outlineVariant", "border"], "#C5C7C4", "#C5C7C4"),
        }
    }

    /// Color keys consulted for this role, in priority order
    pub fn token_keys(self) -> &'static [&'static str] {
        self.source().keys
    }

    /// Literal used when no key is present (or all are empty)
    pub fn fallback(self, brand: Brand) -> &'static str {
        let source = self.source();
        match brand {
            Brand::External => source.external,
            Brand::Internal => source.internal,
        }
    }

    /// First non-empty token value for the role, else the brand literal
    pub fn resolve<'a>(self, bucket: &'a CategoryBucket, brand: Brand) -> &'a str {
        self.token_keys()
            .iter()
            .filter_map(|key| bucket.semantic_color(key))
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| self.fallback(brand))
    }
}

/// Render the theme module for one brand and mode.
///
/// Exports `palettes`, `<mode>ThemeOptions`, and `<mode>Theme` (also the
/// default export).
pub fn render_mui_theme(bucket: &CategoryBucket, config: &ThemeConfig) -> String {
    let mode = config.mode.id();
    let c = |role: ColorRole| role.resolve(bucket, config.brand);

    let palettes = Value::Object(
        bucket
            .palettes
            .iter()
            .map(|(name, tones)| (name.clone(), scalar_value(tones)))
            .collect(),
    );

    format!(
        r#"import {{ createTheme, type ThemeOptions }} from '@mui/material/styles';

export const palettes = {palettes:#} as const;

export const {mode}ThemeOptions: ThemeOptions = {{
  palette: {{
    mode: '{mode}',
    primary: {{
      main: '{primary_main}',
      light: '{primary_light}',
      dark: '{primary_dark}',
      contrastText: '{primary_contrast}',
    }},
    secondary: {{
      main: '{secondary_main}',
      contrastText: '{secondary_contrast}',
    }},
    background: {{
      default: '{background_default}',
      paper: '{background_paper}',
    }},
    text: {{
      primary: '{text_primary}',
      secondary: '{text_secondary}',
    }},
    error: {{
      main: '{error_main}',
      contrastText: '{error_contrast}',
    }},
    warning: {{
      main: '{warning_main}',
      contrastText: '{warning_contrast}',
    }},
    success: {{
      main: '{success_main}',
      contrastText: '{success_contrast}',
    }},
    info: {{
      main: '{info_main}',
      contrastText: '{info_contrast}',
    }},
    divider: '{divider}',
  }},
  typography: {{
    fontFamily: '"Inter", system-ui, -apple-system, sans-serif',
  }},
  shape: {{
    borderRadius: 12,
  }},
  components: {{
    MuiButton: {{
      styleOverrides: {{
        root: {{
          borderRadius: 9999,
          textTransform: 'none',
          fontWeight: 500,
        }},
      }},
    }},
    MuiCard: {{
      styleOverrides: {{
        root: {{
          borderRadius: 16,
        }},
      }},
    }},
  }},
}};

export const {mode}Theme = createTheme({mode}ThemeOptions);
export default {mode}Theme;
"#,
        primary_main = c(ColorRole::PrimaryMain),
        primary_light = c(ColorRole::PrimaryLight),
        primary_dark = c(ColorRole::PrimaryDark),
        primary_contrast = c(ColorRole::PrimaryContrast),
        secondary_main = c(ColorRole::SecondaryMain),
        secondary_contrast = c(ColorRole::SecondaryContrast),
        background_default = c(ColorRole::BackgroundDefault),
        background_paper = c(ColorRole::BackgroundPaper),
        text_primary = c(ColorRole::TextPrimary),
        text_secondary = c(ColorRole::TextSecondary),
        error_main = c(ColorRole::ErrorMain),
        error_contrast = c(ColorRole::ErrorContrast),
        warning_main = c(ColorRole::WarningMain),
        warning_contrast = c(ColorRole::WarningContrast),
        success_main = c(ColorRole::SuccessMain),
        success_contrast = c(ColorRole::SuccessContrast),
        info_main = c(ColorRole::InfoMain),
        info_contrast = c(ColorRole::InfoContrast),
        divider = c(ColorRole::Divider),
    )
}

/// Per-brand entry module combining both modes.
pub fn mui_index(brand: Brand) -> String {
    format!(
        "export {{ lightTheme, lightThemeOptions }} from './{brand}.light.js';\n\
         export {{ darkTheme, darkThemeOptions }} from './{brand}.dark.js';\n\
         export {{ palettes }} from './{brand}.light.js';\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::Mode;
    use crate::token::ResolvedToken;

    fn tok(path: &str, value: &str) -> ResolvedToken {
        ResolvedToken::new(path.split('.'), value)
    }

    #[test]
    fn alternate_keys_are_consulted_in_order() {
        let bucket = CategoryBucket::extract(&[
            tok("color.accent", "#22d3ee"),
            tok("color.border", "#333333"),
            tok("color.outlineVariant", "#C5C7C4"),
        ]);
        assert_eq!(ColorRole::SecondaryMain.resolve(&bucket, Brand::External), "#22d3ee");
        assert_eq!(ColorRole::Divider.resolve(&bucket, Brand::Internal), "#C5C7C4");
    }

    #[test]
    fn empty_token_value_falls_back() {
        let bucket = CategoryBucket::extract(&[tok("color.primary", "")]);
        assert_eq!(ColorRole::PrimaryMain.resolve(&bucket, Brand::Internal), "#7c3aed");
    }

    #[test]
    fn mode_names_exports() {
        let out = render_mui_theme(
            &CategoryBucket::default(),
            &ThemeConfig::new(Brand::Internal, Mode::Dark),
        );
        assert!(out.contains("export const darkThemeOptions: ThemeOptions = {"));
        assert!(out.contains("    mode: 'dark',"));
        assert!(out.contains("export const darkTheme = createTheme(darkThemeOptions);"));
        assert!(out.ends_with("export default darkTheme;\n"));
        assert!(out.contains("export const palettes = {} as const;"));
    }

    #[test]
    fn index_reexports_both_modes() {
        let index = mui_index(Brand::External);
        assert_eq!(
            index,
            "export { lightTheme, lightThemeOptions } from './external.light.js';\n\
             export { darkTheme, darkThemeOptions } from './external.dark.js';\n\
             export { palettes } from './external.light.js';\n"
        );
    }
}
