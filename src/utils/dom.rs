//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Every helper degrades to a no-op (or `None`) outside a browser.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Evaluate a media query once.
///
/// Returns `None` when the platform cannot answer the query.
pub fn media_matches(query: &str) -> Option<bool> {
    let list = window()?.match_media(query).ok()??;
    Some(list.matches())
}

/// Set the theme class (`light` / `dark`) on the `<html>` element.
pub fn apply_theme_class(theme: &str, previous: &[&str]) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(root) = document.document_element()
    {
        let classes = root.class_list();
        for class in previous {
            let _ = classes.remove_1(class);
        }
        let _ = classes.add_1(theme);
    }
}

/// Scroll the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current path (`location.pathname`).
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a new path onto the session history without reloading.
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

/// Reload the page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
