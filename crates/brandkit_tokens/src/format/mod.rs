//! Output formats
//!
//! Each [`Format`] maps a resolved [`TokenSet`] plus [`RenderOptions`] to the
//! text of one artifact. Dispatch is an exhaustive `match`, so adding a format
//! means adding a variant.

mod css;
mod json;
mod mui;
mod tailwind;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::brand::{Brand, Mode, ThemeConfig};
use crate::error::TokenError;
use crate::token::TokenSet;

pub use css::render_css_variables;
pub use json::render_json_nested;
pub use mui::{mui_index, render_mui_theme, ColorRole};
pub use tailwind::render_tailwind_preset;

/// Artifact formats produced by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Custom properties scoped to a mode selector.
    CssVariables,
    /// Token values as a nested JSON object.
    JsonNested,
    /// Tailwind `theme.extend` preset module.
    TailwindPreset,
    /// MUI theme module for one brand and mode.
    MuiTheme,
}

impl Format {
    /// Stable format id used in configuration and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::CssVariables => "css/variables",
            Self::JsonNested => "json/nested",
            Self::TailwindPreset => "tailwind/preset",
            Self::MuiTheme => "mui/theme",
        }
    }

    pub fn all() -> &'static [Format] {
        const FORMATS: [Format; 4] = [
            Format::CssVariables,
            Format::JsonNested,
            Format::TailwindPreset,
            Format::MuiTheme,
        ];
        &FORMATS
    }

    /// File extension of the artifact.
    pub fn extension(self) -> &'static str {
        match self {
            Self::CssVariables => "css",
            Self::JsonNested => "json",
            Self::TailwindPreset => "js",
            Self::MuiTheme => "ts",
        }
    }

    /// Render `set` in this format.
    pub fn render(self, set: &TokenSet, options: &RenderOptions) -> String {
        match self {
            Self::CssVariables => render_css_variables(set, &options.selector()),
            Self::JsonNested => render_json_nested(set),
            Self::TailwindPreset => render_tailwind_preset(&set.bucket()),
            Self::MuiTheme => render_mui_theme(&set.bucket(), &options.theme),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Format {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.id() == s)
            .ok_or_else(|| TokenError::UnknownId {
                kind: "format",
                value: s.to_string(),
            })
    }
}

/// Per-render parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub theme: ThemeConfig,
    /// Overrides the mode's default CSS selector.
    pub selector: Option<String>,
}

impl RenderOptions {
    pub fn new(brand: Brand, mode: Mode) -> Self {
        Self {
            theme: ThemeConfig::new(brand, mode),
            selector: None,
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Selector for CSS output.
    pub fn selector(&self) -> String {
        self.selector
            .clone()
            .unwrap_or_else(|| self.theme.mode.css_selector().to_string())
    }
}
