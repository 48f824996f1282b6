use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::cards::HighlightList;
use crate::components::icons as ic;
use crate::components::social::SocialLinks;
use crate::models::content;

stylance::import_crate_style!(css, "src/pages/profile.module.css");

/// Volunteering experience, laid out like the About page.
#[component]
pub fn Volunteering() -> impl IntoView {
    let volunteering = &content().volunteering;

    view! {
        <div class=css::container>
            <div class=css::wrapper>
                {volunteering.photo.clone().map(|src| view! {
                    <div class=css::photo tabindex="0">
                        <img src=src alt=volunteering.title.clone() loading="lazy" decoding="async" />
                    </div>
                })}

                <div class=css::body>
                    <div class=css::badge>
                        <div class=css::badgeDot></div>
                        <span class=css::badgeText>{volunteering.badge.clone()}</span>
                    </div>

                    <h1 class=css::title>
                        <span class=css::titleGradient>{volunteering.title.clone()}</span>
                    </h1>

                    <div class=css::subtitle>
                        <Icon icon=ic::VOLUNTEERING />
                        <span>{volunteering.organization.clone()}</span>
                    </div>

                    <p class=css::description>{volunteering.summary.clone()}</p>

                    <HighlightList
                        title="Highlights"
                        items=volunteering.highlights.as_slice()
                        lead=volunteering.record.clone()
                    />

                    <div class=css::links>
                        <SocialLinks links=volunteering.contacts.as_slice() link_class=css::socialLink />
                        <a
                            href=volunteering.reference_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=css::primaryLink
                        >
                            <Icon icon=ic::FILE_TEXT />
                            {volunteering.reference_label.clone()}
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
