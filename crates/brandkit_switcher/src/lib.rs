//! Brandkit Theme Switcher
//!
//! Runtime brand and light/dark mode selection for pages that load the
//! generated stylesheets.
//!
//! # Overview
//!
//! The switcher provides:
//! - **State**: one of four (brand, mode) combinations, seeded from a persisted preference
//! - **Presentation**: class and `data-*` attribute markers on a presentation root
//! - **Persistence**: best-effort JSON blob under a configurable key
//! - **Notifications**: optional brand/mode change callbacks
//!
//! Host access (storage, document root) goes through the [`PreferenceStore`]
//! and [`PresentationRoot`] traits so the state machine runs anywhere. The
//! in-memory hosts in [`host`] stand in outside a browser.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use brandkit_switcher::{MemoryRoot, MemoryStore, SwitcherOptions, ThemeSwitcher};
//! use brandkit_tokens::Brand;
//!
//! let mut switcher = ThemeSwitcher::new(
//!     SwitcherOptions::default().on_brand_change(|brand| println!("brand: {brand}")),
//!     MemoryStore::new(),
//!     MemoryRoot::new(),
//! );
//! switcher.init();
//! switcher.set_brand(Brand::Internal);
//! switcher.toggle_mode();
//! ```

pub mod css;
pub mod host;
pub mod switcher;

pub use brandkit_tokens::{Brand, Mode};
pub use css::{get_css_var, set_css_var};
pub use host::{
    MemoryRoot, MemoryStore, NoopRoot, PreferenceStore, PresentationRoot, StoreError,
    UnavailableStore,
};
pub use switcher::{SwitcherOptions, ThemeSwitcher, DEFAULT_PERSIST_KEY};
