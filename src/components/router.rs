//! Application router component.
//!
//! Handles path-based routing on top of the History API. The location is
//! read from `window.location.pathname`; internal links push a new history
//! entry, and `popstate` events (back/forward) feed the shell the new path.
//!
//! # Architecture
//!
//! - **URL path is the source of truth**: the shell resolves it through the route table
//! - **Layout never re-renders on navigation**: only the content region changes
//! - **popstate events**: Browser back/forward buttons work automatically

#[cfg(target_arch = "wasm32")]
use folio_core::ShellEvent;
use folio_core::PageId;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::layout::Layout;
use crate::components::transition::PageTransition;
#[cfg(target_arch = "wasm32")]
use crate::utils::dom;

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Listens for history navigation and renders the layout with the page
/// transition as its content.
#[component]
pub fn AppRouter() -> impl IntoView {
    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let ctx = use_context::<AppContext>().expect("AppContext must be provided");
        let closure = Closure::wrap(Box::new(move || {
            ctx.dispatch(ShellEvent::Navigate(dom::current_path()));
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <Layout>
            <PageTransition />
        </Layout>
    }
}

// ============================================================================
// Links
// ============================================================================

/// In-app link to a page.
///
/// Plain clicks navigate without a reload. Modified clicks (new tab, new
/// window) are left to the browser. The link for the current page carries
/// `aria-current="page"`, which the styles key on.
#[component]
pub fn PageLink(
    page: PageId,
    link_class: &'static str,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let path = page.path();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(path);
    };

    let is_current = move || ctx.screen.get().page() == Some(page);

    view! {
        <a
            href=path
            class=link_class
            aria-current=move || is_current().then_some("page")
            on:click=on_click
        >
            {children()}
        </a>
    }
}
