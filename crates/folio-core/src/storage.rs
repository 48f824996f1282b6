//! Key-value persistence seam.
//!
//! The browser build backs this with `localStorage`; tests use [`MemoryStore`].

use std::collections::HashMap;

use thiserror::Error;

/// Storage operation errors.
///
/// None of these are fatal: callers keep their in-memory state and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store cannot be reached (private mode, no window, ...).
    #[error("storage not available")]
    Unavailable,
    /// Reading a key failed.
    #[error("failed to read `{0}` from storage")]
    ReadFailed(String),
    /// Writing a key failed (quota, security policy).
    #[error("failed to write `{0}` to storage")]
    WriteFailed(String),
}

/// A durable string key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, optionally simulating an unavailable backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `key = value`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// A store whose every operation fails with [`StorageError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            entries: HashMap::new(),
            unavailable: true,
        }
    }

    /// Direct read that bypasses the availability flag.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), Ok(None));

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Ok(Some("dark".to_string())));

        store.set("theme", "light").unwrap();
        assert_eq!(store.peek("theme"), Some("light"));
    }

    #[test]
    fn test_unavailable_store_fails_every_call() {
        let mut store = MemoryStore::unavailable();
        assert_eq!(store.get("theme"), Err(StorageError::Unavailable));
        assert_eq!(store.set("theme", "dark"), Err(StorageError::Unavailable));
        assert_eq!(store.peek("theme"), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(StorageError::Unavailable.to_string(), "storage not available");
        assert_eq!(
            StorageError::WriteFailed("theme".into()).to_string(),
            "failed to write `theme` to storage"
        );
    }
}
