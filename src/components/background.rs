//! Theme-dependent page background.

use folio_core::background;
use leptos::prelude::*;

use crate::app::AppContext;

/// Decorative backdrop behind all content. Not interactive, not in the
/// accessibility tree.
#[component]
pub fn Background() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let style = move || background::render(ctx.theme.get()).to_css();

    view! { <div aria-hidden="true" style=style></div> }
}
