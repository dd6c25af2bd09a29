//! Minimal document model used by the highlighter.
//!
//! A host binds `Document` to its real element registry. `MemoryDocument`
//! keeps elements and their inline styles in memory.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

/// A live element whose inline style can be written.
pub trait Element: Send + Sync {
    /// Set one style property. An empty value clears it.
    fn set_style(&self, property: &str, value: &str);

    /// Current value of a style property, empty when unset.
    fn style(&self, property: &str) -> String;
}

pub trait Document {
    fn get_element_by_id(&self, id: &str) -> Option<Arc<dyn Element>>;
}

impl<D: Document + ?Sized> Document for &D {
    fn get_element_by_id(&self, id: &str) -> Option<Arc<dyn Element>> {
        (**self).get_element_by_id(id)
    }
}

impl<D: Document + ?Sized> Document for Arc<D> {
    fn get_element_by_id(&self, id: &str) -> Option<Arc<dyn Element>> {
        (**self).get_element_by_id(id)
    }
}

#[derive(Debug, Default)]
pub struct MemoryElement {
    styles: Mutex<BTreeMap<String, String>>,
}

impl MemoryElement {
    /// Every style property currently set.
    pub fn styles(&self) -> BTreeMap<String, String> {
        self.styles.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Element for MemoryElement {
    fn set_style(&self, property: &str, value: &str) {
        let mut styles = self.styles.lock().unwrap_or_else(PoisonError::into_inner);
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn style(&self, property: &str) -> String {
        self.styles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(property)
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: Mutex<HashMap<String, Arc<MemoryElement>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, or return the one already registered under `id`.
    pub fn insert(&self, id: &str) -> Arc<MemoryElement> {
        self.elements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id.to_string())
            .or_default()
            .clone()
    }

    pub fn remove(&self, id: &str) -> Option<Arc<MemoryElement>> {
        self.elements.lock().unwrap_or_else(PoisonError::into_inner).remove(id)
    }
}

impl Document for MemoryDocument {
    fn get_element_by_id(&self, id: &str) -> Option<Arc<dyn Element>> {
        let elements = self.elements.lock().unwrap_or_else(PoisonError::into_inner);
        elements.get(id).map(|element| element.clone() as Arc<dyn Element>)
    }
}
