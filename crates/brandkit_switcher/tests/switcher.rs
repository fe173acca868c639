use std::cell::RefCell;
use std::rc::Rc;

use brandkit_switcher::{
    get_css_var, set_css_var, Brand, MemoryRoot, MemoryStore, Mode, NoopRoot, SwitcherOptions,
    ThemeSwitcher, UnavailableStore, DEFAULT_PERSIST_KEY,
};
use pretty_assertions::assert_eq;

fn recording_options() -> (SwitcherOptions, Rc<RefCell<Vec<Brand>>>, Rc<RefCell<Vec<Mode>>>) {
    let brands = Rc::new(RefCell::new(Vec::new()));
    let modes = Rc::new(RefCell::new(Vec::new()));
    let brand_log = brands.clone();
    let mode_log = modes.clone();
    let options = SwitcherOptions::default()
        .on_brand_change(move |brand| brand_log.borrow_mut().push(brand))
        .on_mode_change(move |mode| mode_log.borrow_mut().push(mode));
    (options, brands, modes)
}

#[test]
fn defaults_without_persisted_value() {
    let switcher = ThemeSwitcher::new(SwitcherOptions::default(), MemoryStore::new(), NoopRoot);
    assert_eq!(switcher.brand(), Brand::External);
    assert_eq!(switcher.mode(), Mode::Light);

    let switcher = ThemeSwitcher::new(
        SwitcherOptions::default()
            .with_default_brand(Brand::Internal)
            .with_default_mode(Mode::Dark),
        MemoryStore::new(),
        NoopRoot,
    );
    assert_eq!((switcher.brand(), switcher.mode()), (Brand::Internal, Mode::Dark));
}

#[test]
fn persisted_value_wins_over_defaults() {
    let store = MemoryStore::with_entry("prefs", r#"{"brand":"internal","mode":"dark"}"#);
    let switcher = ThemeSwitcher::new(
        SwitcherOptions::default().with_persist_key("prefs"),
        store,
        NoopRoot,
    );
    assert_eq!((switcher.brand(), switcher.mode()), (Brand::Internal, Mode::Dark));
}

#[test]
fn invalid_persisted_brand_falls_back_alone() {
    let store = MemoryStore::with_entry(DEFAULT_PERSIST_KEY, r#"{"brand":"purple","mode":"dark"}"#);
    let switcher = ThemeSwitcher::new(SwitcherOptions::default(), store, NoopRoot);
    assert_eq!((switcher.brand(), switcher.mode()), (Brand::External, Mode::Dark));
}

#[test]
fn setting_current_brand_is_a_no_op() {
    let store = MemoryStore::with_entry(DEFAULT_PERSIST_KEY, r#"{"brand":"internal"}"#);
    let root = MemoryRoot::new();
    let (options, brands, _) = recording_options();
    let mut switcher = ThemeSwitcher::new(options, store.clone(), root.clone());

    switcher.set_brand(Brand::Internal);

    assert!(brands.borrow().is_empty());
    assert_eq!(store.write_count(), 0);
    assert!(root.classes().is_empty());
}

#[test]
fn brand_change_applies_persists_and_notifies() {
    let store = MemoryStore::new();
    let root = MemoryRoot::new();
    let (options, brands, modes) = recording_options();
    let mut switcher = ThemeSwitcher::new(options, store.clone(), root.clone());

    switcher.set_brand(Brand::Internal);

    assert_eq!(*brands.borrow(), vec![Brand::Internal]);
    assert!(modes.borrow().is_empty());
    assert_eq!(store.write_count(), 1);
    assert_eq!(root.classes(), vec!["light", "internal"]);
    assert_eq!(root.attribute("data-brand").as_deref(), Some("internal"));
    assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
}

#[test]
fn set_mode_is_symmetric() {
    let store = MemoryStore::new();
    let (options, _, modes) = recording_options();
    let mut switcher = ThemeSwitcher::new(options, store.clone(), NoopRoot);

    switcher.set_mode(Mode::Light);
    assert!(modes.borrow().is_empty());
    assert_eq!(store.write_count(), 0);

    switcher.set_mode(Mode::Dark);
    assert_eq!(*modes.borrow(), vec![Mode::Dark]);
    assert_eq!(store.write_count(), 1);
}

#[test]
fn toggle_twice_returns_and_fires_both_times() {
    let store = MemoryStore::new();
    let root = MemoryRoot::new();
    let (options, _, modes) = recording_options();
    let mut switcher = ThemeSwitcher::new(options, store.clone(), root.clone());

    switcher.toggle_mode();
    assert_eq!(switcher.mode(), Mode::Dark);
    assert!(root.has_class("dark"));
    assert!(!root.has_class("light"));

    switcher.toggle_mode();
    assert_eq!(switcher.mode(), Mode::Light);
    assert_eq!(*modes.borrow(), vec![Mode::Dark, Mode::Light]);
    assert_eq!(store.write_count(), 2);
    assert_eq!(
        store.get(DEFAULT_PERSIST_KEY).as_deref(),
        Some(r#"{"brand":"external","mode":"light"}"#)
    );
}

#[test]
fn init_applies_without_persisting() {
    let store = MemoryStore::with_entry(DEFAULT_PERSIST_KEY, r#"{"brand":"internal","mode":"dark"}"#);
    let root = MemoryRoot::new();
    let (options, brands, modes) = recording_options();
    let switcher = ThemeSwitcher::new(options, store.clone(), root.clone());

    switcher.init();
    let first = root.classes();
    switcher.init();

    assert_eq!(first, vec!["dark", "internal"]);
    assert_eq!(root.classes(), first);
    assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(store.write_count(), 0);
    assert!(brands.borrow().is_empty());
    assert!(modes.borrow().is_empty());
}

#[test]
fn store_failures_are_swallowed() {
    let root = MemoryRoot::new();
    let (options, brands, _) = recording_options();
    let mut switcher = ThemeSwitcher::new(options, UnavailableStore, root.clone());

    switcher.set_brand(Brand::Internal);
    switcher.toggle_mode();

    assert_eq!(switcher.brand(), Brand::Internal);
    assert_eq!(*brands.borrow(), vec![Brand::Internal]);
    assert_eq!(root.classes(), vec!["dark", "internal"]);
}

#[test]
fn css_vars_through_switcher_root() {
    let root = MemoryRoot::new();
    let switcher = ThemeSwitcher::new(SwitcherOptions::default(), MemoryStore::new(), root.clone());
    set_css_var(switcher.root(), "--color-primary", "#7c3aed");
    assert_eq!(get_css_var(&root, "--color-primary"), "#7c3aed");
}
