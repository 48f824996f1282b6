//! Outbound social/contact links.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::SocialLink;

stylance::import_crate_style!(css, "src/components/social.module.css");

/// A row of icon links.
///
/// Entries without an `href` still render (as inert anchors) so unpublished
/// contacts keep their place in the row.
#[component]
pub fn SocialLinks(links: &'static [SocialLink], link_class: &'static str) -> impl IntoView {
    view! {
        <div class=css::row>
            {links
                .iter()
                .map(|link| view! {
                    <a
                        href=link.href.clone()
                        title=link.title.clone()
                        aria-label=link.title.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class=link_class
                    >
                        <Icon icon=ic::for_link(link.icon) />
                        {link.label.clone().map(|label| view! {
                            <span class=css::label>{label}</span>
                        })}
                    </a>
                })
                .collect_view()}
        </div>
    }
}
