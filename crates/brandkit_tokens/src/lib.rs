//! Brandkit Token Pipeline
//!
//! Turns brand/mode-specific design token definitions into consumable
//! artifacts for two brands (`external`, `internal`) and two modes
//! (`light`, `dark`).
//!
//! # Overview
//!
//! The pipeline provides:
//! - **Token sources**: layered JSON files merged and alias-resolved into a [`TokenSet`]
//! - **Extraction**: a [`CategoryBucket`] grouping tokens by category (colors, spacing, ...)
//! - **Formats**: CSS custom properties, nested JSON, a Tailwind preset, and MUI theme modules
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use brandkit_tokens::{Brand, Format, Mode, RenderOptions, TokenSource};
//!
//! let set = TokenSource::new()
//!     .with_dir("src/tokens/core")
//!     .with_file("src/tokens/external/colors.json")
//!     .with_file("src/tokens/external/semantic.light.json")
//!     .load()?;
//!
//! let options = RenderOptions::new(Brand::External, Mode::Light);
//! let preset = Format::TailwindPreset.render(&set, &options);
//! ```
//!
//! # Formats
//!
//! Formats are a closed set selected through [`Format`]. Each one is a pure
//! function of the resolved tokens and the [`RenderOptions`]; writing the
//! result to disk is the caller's job.

pub mod brand;
pub mod bucket;
pub mod error;
pub mod format;
pub mod source;
pub mod token;

// Re-export commonly used types
pub use brand::{Brand, Mode, ThemeConfig};
pub use bucket::{CategoryBucket, ColorNode, ColorTree, ScalarCategory, ScalarMap};
pub use error::{Result, TokenError};
pub use format::{mui_index, ColorRole, Format, RenderOptions};
pub use source::TokenSource;
pub use token::{ResolvedToken, TokenSet};
