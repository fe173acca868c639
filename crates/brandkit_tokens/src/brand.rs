//! Brand and mode catalog.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Visual identity variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    /// Customer-facing brand (Material 3 teal).
    #[default]
    External,
    /// Internal tooling brand (purple).
    Internal,
}

impl Brand {
    /// Stable brand id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Internal => "internal",
        }
    }

    /// Full brand list.
    pub fn all() -> &'static [Brand] {
        const BRANDS: [Brand; 2] = [Brand::External, Brand::Internal];
        &BRANDS
    }

    /// Parse an exact brand id; anything else is rejected.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "external" => Some(Self::External),
            "internal" => Some(Self::Internal),
            _ => None,
        }
    }
}

impl Display for Brand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Brand {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| TokenError::UnknownId {
            kind: "brand",
            value: s.to_string(),
        })
    }
}

/// Light/dark presentation variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn all() -> &'static [Mode] {
        const MODES: [Mode; 2] = [Mode::Light, Mode::Dark];
        &MODES
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stylesheet selector the mode's custom properties are scoped to.
    pub fn css_selector(self) -> &'static str {
        match self {
            Self::Light => ":root",
            Self::Dark => ".dark, [data-theme=\"dark\"]",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mode {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| TokenError::UnknownId {
            kind: "mode",
            value: s.to_string(),
        })
    }
}

/// Render-time (mode, brand) pair supplied per artifact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ThemeConfig {
    pub mode: Mode,
    pub brand: Brand,
}

impl ThemeConfig {
    pub fn new(brand: Brand, mode: Mode) -> Self {
        Self { mode, brand }
    }

    /// Every (brand, mode) pair, brand-major.
    pub fn all() -> impl Iterator<Item = ThemeConfig> {
        Brand::all()
            .iter()
            .flat_map(|&brand| Mode::all().iter().map(move |&mode| Self::new(brand, mode)))
    }

    /// Artifact stem, e.g. `external.light`.
    pub fn stem(&self) -> String {
        format!("{}.{}", self.brand, self.mode)
    }
}
