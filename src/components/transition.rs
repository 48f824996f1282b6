//! Page transition output.
//!
//! Renders every mounted page subtree, keyed by its transition generation,
//! so each navigation replaces the subtree instead of patching it. The
//! phase of a frame only swaps its CSS class; the exiting frame is inert
//! and hidden from assistive technology while it animates out.

use folio_core::{Phase, Screen};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::transition::{DURATION_MS, ENTER_OFFSET_PX, EXIT_OFFSET_PX};
use crate::pages;

stylance::import_crate_style!(css, "src/components/transition.module.css");

#[component]
pub fn PageTransition() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let timing = format!(
        "--page-duration: {}ms; --page-enter-offset: {}px; --page-exit-offset: {}px;",
        DURATION_MS, ENTER_OFFSET_PX, EXIT_OFFSET_PX
    );

    view! {
        <div class=css::stage style=timing>
            <For
                each=move || ctx.mounted.get()
                key=|page| page.key
                children=move |page| view! {
                    <PageFrame generation=page.key screen=page.screen />
                }
            />
        </div>
    }
}

#[component]
fn PageFrame(generation: u64, screen: Screen) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let phase = Memo::new(move |_| {
        ctx.mounted.with(|mounted| {
            mounted
                .iter()
                .find(|page| page.key == generation)
                .map(|page| page.phase)
        })
    });
    let exiting = move || phase.get() == Some(Phase::Exiting);

    let class = move || match phase.get() {
        Some(Phase::Entering) => format!("{} {}", css::frame, css::entering),
        Some(Phase::Exiting) => format!("{} {}", css::frame, css::exiting),
        _ => css::frame.to_string(),
    };

    view! {
        <div
            class=class
            inert=exiting
            aria-hidden=move || exiting().then_some("true")
        >
            {pages::render(screen)}
        </div>
    }
}
