//! Utility modules for browser and DOM access.
//!
//! Provides:
//! - [`dom`] - Window, document, history and media-query helpers
//! - [`LocalStore`] - localStorage-backed key-value store

pub mod dom;
mod storage;

pub use storage::LocalStore;
