//! `web_sys` implementations of the host capability traits.

use vscode_boot_core::{Document, Element, Storage};

use crate::LOG_TARGET;

pub struct WebElement(web_sys::Element);

impl Element for WebElement {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

pub struct WebDocument(web_sys::Document);

impl WebDocument {
    /// The page's document, if this global scope has one (workers don't).
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self)
    }
}

impl Document for WebDocument {
    type Element<'a> = WebElement;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Element<'_>> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn set_body_background_color(&mut self, color: &str) {
        let Some(body) = self.0.body() else {
            log::warn!(target: LOG_TARGET, "document has no body; background not applied");
            return;
        };
        if let Err(e) = body.style().set_property("background-color", color) {
            log::warn!(target: LOG_TARGET, "failed to set body background: {e:?}");
        }
    }
}

pub struct WebStorage(web_sys::Storage);

impl WebStorage {
    /// `window.localStorage`, or `None` when the browser denies access
    /// (opaque origins, disabled storage).
    pub fn local() -> Option<Self> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage.map(Self),
            Err(e) => {
                log::warn!(target: LOG_TARGET, "localStorage is not accessible: {e:?}");
                None
            }
        }
    }
}

impl Storage for WebStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.0.get_item(key) {
            Ok(item) => item,
            Err(e) => {
                log::warn!(target: LOG_TARGET, "failed to read {key} from localStorage: {e:?}");
                None
            }
        }
    }
}
