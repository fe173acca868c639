//! Brand/mode state machine
//!
//! The switcher holds one of four states (brand x mode). Setters that would
//! not change anything are no-ops; real changes re-apply presentation markers,
//! persist the preference, and fire the matching callback. Persistence is
//! advisory: store failures are logged and dropped.

use std::fmt;

use brandkit_tokens::{Brand, Mode};
use serde::Serialize;
use serde_json::Value;

use crate::host::{PreferenceStore, PresentationRoot, StoreError};

/// Storage key used when none is configured
pub const DEFAULT_PERSIST_KEY: &str = "runwell-theme";

type BrandCallback = Box<dyn FnMut(Brand)>;
type ModeCallback = Box<dyn FnMut(Mode)>;

/// Construction options for [`ThemeSwitcher`]
pub struct SwitcherOptions {
    pub default_brand: Brand,
    pub default_mode: Mode,
    pub persist_key: String,
    on_brand_change: Option<BrandCallback>,
    on_mode_change: Option<ModeCallback>,
}

impl Default for SwitcherOptions {
    fn default() -> Self {
        Self {
            default_brand: Brand::External,
            default_mode: Mode::Light,
            persist_key: DEFAULT_PERSIST_KEY.to_string(),
            on_brand_change: None,
            on_mode_change: None,
        }
    }
}

impl SwitcherOptions {
    pub fn with_default_brand(mut self, brand: Brand) -> Self {
        self.default_brand = brand;
        self
    }

    pub fn with_default_mode(mut self, mode: Mode) -> Self {
        self.default_mode = mode;
        self
    }

    pub fn with_persist_key(mut self, key: impl Into<String>) -> Self {
        self.persist_key = key.into();
        self
    }

    /// Called with the new brand after every effective brand change
    pub fn on_brand_change(mut self, callback: impl FnMut(Brand) + 'static) -> Self {
        self.on_brand_change = Some(Box::new(callback));
        self
    }

    /// Called with the new mode after every mode change
    pub fn on_mode_change(mut self, callback: impl FnMut(Mode) + 'static) -> Self {
        self.on_mode_change = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for SwitcherOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitcherOptions")
            .field("default_brand", &self.default_brand)
            .field("default_mode", &self.default_mode)
            .field("persist_key", &self.persist_key)
            .field("on_brand_change", &self.on_brand_change.is_some())
            .field("on_mode_change", &self.on_mode_change.is_some())
            .finish()
    }
}

#[derive(Serialize)]
struct PersistedTheme {
    brand: Brand,
    mode: Mode,
}

/// Read the stored preference field by field. Each field that is missing or
/// not an exact id falls back to its default on its own.
fn load_persisted(
    store: &dyn PreferenceStore,
    key: &str,
    default_brand: Brand,
    default_mode: Mode,
) -> (Brand, Mode) {
    let Some(blob) = store.load(key) else {
        return (default_brand, default_mode);
    };
    let parsed: Value = match serde_json::from_str(&blob) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!("ignoring malformed theme preference under {key}: {err}");
            return (default_brand, default_mode);
        }
    };

    let brand = parsed
        .get("brand")
        .and_then(Value::as_str)
        .and_then(Brand::from_id)
        .unwrap_or(default_brand);
    let mode = parsed
        .get("mode")
        .and_then(Value::as_str)
        .and_then(Mode::from_id)
        .unwrap_or(default_mode);
    (brand, mode)
}

/// Brand and mode selection bound to a store and a presentation root
pub struct ThemeSwitcher {
    brand: Brand,
    mode: Mode,
    persist_key: String,
    store: Box<dyn PreferenceStore>,
    root: Box<dyn PresentationRoot>,
    on_brand_change: Option<BrandCallback>,
    on_mode_change: Option<ModeCallback>,
}

impl ThemeSwitcher {
    /// Resolve the initial state from the store, falling back to the
    /// option defaults. Nothing is applied until [`ThemeSwitcher::init`].
    pub fn new(
        options: SwitcherOptions,
        store: impl PreferenceStore + 'static,
        root: impl PresentationRoot + 'static,
    ) -> Self {
        let (brand, mode) = load_persisted(
            &store,
            &options.persist_key,
            options.default_brand,
            options.default_mode,
        );
        tracing::debug!("ThemeSwitcher::new - resolved {brand}/{mode}");

        Self {
            brand,
            mode,
            persist_key: options.persist_key,
            store: Box::new(store),
            root: Box::new(root),
            on_brand_change: options.on_brand_change,
            on_mode_change: options.on_mode_change,
        }
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The presentation root the switcher writes to
    pub fn root(&self) -> &dyn PresentationRoot {
        self.root.as_ref()
    }

    /// Sync the presentation root with the current state
    pub fn init(&self) {
        self.apply();
    }

    /// Switch brand; no-op when unchanged
    pub fn set_brand(&mut self, brand: Brand) {
        if brand == self.brand {
            return;
        }
        tracing::debug!(
            "ThemeSwitcher::set_brand - switching from {} to {}",
            self.brand,
            brand
        );
        self.brand = brand;
        self.apply();
        self.persist();
        if let Some(callback) = self.on_brand_change.as_mut() {
            callback(brand);
        }
    }

    /// Switch mode; no-op when unchanged
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        tracing::debug!(
            "ThemeSwitcher::set_mode - switching from {} to {}",
            self.mode,
            mode
        );
        self.change_mode(mode);
    }

    /// Flip between light and dark
    pub fn toggle_mode(&mut self) {
        self.change_mode(self.mode.toggle());
    }

    fn change_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.apply();
        self.persist();
        if let Some(callback) = self.on_mode_change.as_mut() {
            callback(mode);
        }
    }

    fn apply(&self) {
        for mode in Mode::all() {
            self.root.remove_class(mode.id());
        }
        for brand in Brand::all() {
            self.root.remove_class(brand.id());
        }
        self.root.remove_attribute("data-theme");
        self.root.remove_attribute("data-brand");

        self.root.add_class(self.mode.id());
        self.root.add_class(self.brand.id());
        self.root.set_attribute("data-theme", self.mode.id());
        self.root.set_attribute("data-brand", self.brand.id());
    }

    fn persist(&self) {
        let result = serde_json::to_string(&PersistedTheme {
            brand: self.brand,
            mode: self.mode,
        })
        .map_err(|err| StoreError::Serialize(err.to_string()))
        .and_then(|blob| self.store.store(&self.persist_key, &blob));

        if let Err(err) = result {
            tracing::warn!("theme preference not saved: {err}");
        }
    }
}

impl fmt::Debug for ThemeSwitcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSwitcher")
            .field("brand", &self.brand)
            .field("mode", &self.mode)
            .field("persist_key", &self.persist_key)
            .finish_non_exhaustive()
    }
}
