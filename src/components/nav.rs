//! Navigation bar and side panel.
//!
//! On wide screens the page links sit in the bar. Below
//! `MOBILE_BREAKPOINT_PX` they move into a side panel opened by the menu
//! button; the panel closes on navigation, on a backdrop click, and when
//! the viewport grows past the breakpoint.

use folio_core::{PageId, RouteTable, ThemeMode};
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::PageLink;
use crate::config::{MOBILE_BREAKPOINT_PX, SITE_NAME};

stylance::import_crate_style!(css, "src/components/nav.module.css");

fn nav_pages() -> Vec<PageId> {
    RouteTable::site().nav_entries()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let theme_title = Signal::derive(move || match ctx.theme.get() {
        ThemeMode::Light => "Switch to dark theme",
        ThemeMode::Dark => "Switch to light theme",
    });

    view! {
        <header class=css::bar>
            <PageLink page=PageId::About link_class=css::brand>
                {SITE_NAME}
            </PageLink>

            <nav class=css::links aria-label="Primary">
                {nav_pages()
                    .into_iter()
                    .map(|page| view! {
                        <PageLink page=page link_class=css::link>{page.label()}</PageLink>
                    })
                    .collect_view()}
            </nav>

            <div class=css::actions>
                <button
                    class=css::iconButton
                    on:click=move |_| ctx.toggle_theme()
                    title=move || theme_title.get()
                    aria-label=move || theme_title.get()
                >
                    {move || match ctx.theme.get() {
                        ThemeMode::Light => view! { <Icon icon=ic::MOON /> }.into_any(),
                        ThemeMode::Dark => view! { <Icon icon=ic::SUN /> }.into_any(),
                    }}
                </button>

                <button
                    class=css::menuButton
                    on:click=move |_| ctx.toggle_side_nav()
                    aria-label="Toggle navigation"
                    aria-expanded=move || ctx.side_nav_open.get().to_string()
                >
                    {move || if ctx.side_nav_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>
            </div>
        </header>
    }
}

#[component]
pub fn SidePanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let is_mobile = use_media_query(format!("(max-width: {}px)", MOBILE_BREAKPOINT_PX));
    Effect::new(move || {
        if !is_mobile.get() && ctx.side_nav_open.get_untracked() {
            ctx.close_side_nav();
        }
    });

    let panel_class = move || {
        if ctx.side_nav_open.get() {
            format!("{} {}", css::panel, css::panelOpen)
        } else {
            css::panel.to_string()
        }
    };

    view! {
        <Show when=move || ctx.side_nav_open.get()>
            <div class=css::backdrop on:click=move |_| ctx.close_side_nav()></div>
        </Show>

        <aside
            class=panel_class
            aria-hidden=move || (!ctx.side_nav_open.get()).to_string()
            inert=move || !ctx.side_nav_open.get()
        >
            <nav class=css::panelLinks aria-label="Pages">
                {nav_pages()
                    .into_iter()
                    .map(|page| view! {
                        <PageLink page=page link_class=css::panelLink>{page.label()}</PageLink>
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
