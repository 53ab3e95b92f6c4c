//! Browser backends for the theme engine.
//!
//! Reads and writes the preference in `localStorage` and applies the
//! `dark`/`light` class on the `<html>` element. Requires a browser
//! environment.
//!
//! ERROR HANDLING
//! ==============
//! Disabled storage or a missing document drops the write; the engine keeps
//! its in-memory preference. Outside the browser `load` reports nothing
//! stored and `apply` does nothing, so the server always renders `dark`.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{PreferenceStore, ThemePreference, ThemeTarget};
#[cfg(feature = "hydrate")]
use crate::state::theme::STORAGE_KEY;

/// `localStorage` slot for the theme preference.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }
}

/// Class list of the `<html>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn apply(&self, preference: ThemePreference) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = doc.document_element() {
                    let class_list = el.class_list();
                    let _ = class_list.add_1(preference.as_str());
                    let _ = class_list.remove_1(preference.opposite().as_str());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = preference;
        }
    }
}
