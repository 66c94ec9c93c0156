//! The slices of the browser environment the extractors touch.
//!
//! `Document` and `Storage` are deliberately narrow: element lookup by id,
//! attribute reads, and writing the body's background color on one side,
//! and `getItem` on the other. The wasm bridge implements them over `web_sys`;
//! the in-memory hosts below back tests and non-browser embedders.

use std::collections::HashMap;

pub trait Element {
    fn get_attribute(&self, name: &str) -> Option<String>;
}

impl<E: Element + ?Sized> Element for &E {
    fn get_attribute(&self, name: &str) -> Option<String> {
        (**self).get_attribute(name)
    }
}

pub trait Document {
    type Element<'a>: Element
    where
        Self: 'a;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Element<'_>>;

    /// Set the inline `background-color` of `<body>`.
    fn set_body_background_color(&mut self, color: &str);
}

pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    attributes: HashMap<String, String>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

impl Element for MemoryElement {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

/// Document with elements keyed by id and a `<body>` whose only style is
/// its background color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
    body_background: Option<String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: impl Into<String>, element: MemoryElement) -> Self {
        self.insert_element(id, element);
        self
    }

    pub fn insert_element(&mut self, id: impl Into<String>, element: MemoryElement) {
        self.elements.insert(id.into(), element);
    }

    pub fn remove_element(&mut self, id: &str) -> Option<MemoryElement> {
        self.elements.remove(id)
    }

    /// Current `background-color` of `<body>`, if one was ever set.
    pub fn body_background_color(&self) -> Option<&str> {
        self.body_background.as_deref()
    }
}

impl Document for MemoryDocument {
    type Element<'a> = &'a MemoryElement;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Element<'_>> {
        self.elements.get(id)
    }

    fn set_body_background_color(&mut self, color: &str) {
        self.body_background = Some(color.to_string());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}
