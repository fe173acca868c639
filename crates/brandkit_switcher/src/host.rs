//! Host capabilities used by the switcher
//!
//! In a browser these map onto `localStorage` and `document.documentElement`.
//! Methods take `&self`, matching the shared-handle nature of those APIs.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

/// Preference store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Storage is disabled or missing in this environment
    #[error("preference store unavailable")]
    Unavailable,

    /// The preference could not be serialized
    #[error("failed to serialize preference: {0}")]
    Serialize(String),
}

/// Key-value persistence for the preference blob
pub trait PreferenceStore {
    /// Read the stored blob, `None` if missing or unreadable
    fn load(&self, key: &str) -> Option<String>;

    /// Write the blob
    fn store(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The element carrying theme markers and custom properties
pub trait PresentationRoot {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    /// Current value of a style property, if set
    fn style_property(&self, name: &str) -> Option<String>;
    fn set_style_property(&self, name: &str, value: &str);
}

/// In-memory store; clones share the same entries
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<IndexMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.into(), value.into());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Store with no backing storage; every write fails
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn store(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[derive(Debug, Default)]
struct RootState {
    classes: IndexSet<String>,
    attributes: IndexMap<String, String>,
    style: IndexMap<String, String>,
}

/// In-memory presentation root; clones share the same element
#[derive(Clone, Debug, Default)]
pub struct MemoryRoot {
    state: Rc<RefCell<RootState>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applied classes in insertion order
    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }
}

impl PresentationRoot for MemoryRoot {
    fn add_class(&self, class: &str) {
        self.state.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.state.borrow_mut().classes.shift_remove(class);
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.state.borrow_mut().attributes.shift_remove(name);
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.state.borrow().style.get(name).cloned()
    }

    fn set_style_property(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .style
            .insert(name.to_string(), value.to_string());
    }
}

/// Root for hosts without a document
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRoot;

impl PresentationRoot for NoopRoot {
    fn add_class(&self, _class: &str) {}
    fn remove_class(&self, _class: &str) {}
    fn set_attribute(&self, _name: &str, _value: &str) {}
    fn remove_attribute(&self, _name: &str) {}

    fn style_property(&self, _name: &str) -> Option<String> {
        None
    }

    fn set_style_property(&self, _name: &str, _value: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.store("k", "v").unwrap();
        assert_eq!(handle.get("k").as_deref(), Some("v"));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn write_count_tracks_every_clone() {
        let store = MemoryStore::with_entry("k", "seed");
        let handle = store.clone();
        assert_eq!(store.write_count(), 0);
        store.store("k", "a").unwrap();
        handle.store("k", "b").unwrap();
        handle.store("other", "c").unwrap();
        assert_eq!(store.write_count(), 3);
        assert_eq!(store.get("k").as_deref(), Some("b"));
    }

    #[test]
    fn memory_root_classes_are_a_set() {
        let root = MemoryRoot::new();
        root.add_class("dark");
        root.add_class("dark");
        root.add_class("internal");
        root.remove_class("light");
        assert_eq!(root.classes(), vec!["dark", "internal"]);
    }

    #[test]
    fn unavailable_store_rejects_writes() {
        assert_eq!(UnavailableStore.store("k", "v"), Err(StoreError::Unavailable));
        assert_eq!(UnavailableStore.load("k"), None);
    }
}
