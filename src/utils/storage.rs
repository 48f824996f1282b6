//! localStorage-backed [`KeyValueStore`].

use folio_core::{KeyValueStore, StorageError};

use super::dom;

/// Durable browser store. Every call looks up `localStorage` afresh, so a
/// store that is blocked (private browsing, disabled cookies) just reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|_| StorageError::ReadFailed(key.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_through_local_storage() {
        let mut store = LocalStore;
        store.set("folio.test", "dark").unwrap();
        assert_eq!(store.get("folio.test"), Ok(Some("dark".to_string())));
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item("folio.test");
        }
    }

    #[wasm_bindgen_test]
    fn test_theme_class_is_exclusive() {
        dom::apply_theme_class("dark", &["light", "dark"]);
        dom::apply_theme_class("light", &["light", "dark"]);

        let root = dom::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .unwrap();
        assert!(root.class_list().contains("light"));
        assert!(!root.class_list().contains("dark"));
    }
}
