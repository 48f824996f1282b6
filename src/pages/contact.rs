use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::cards::SectionHeading;
use crate::components::icons as ic;
use crate::models::content;

stylance::import_crate_style!(css, "src/pages/section.module.css");

/// Contact methods as a list of labelled links.
#[component]
pub fn Contact() -> impl IntoView {
    let content = content();

    view! {
        <div class=css::page>
            <SectionHeading icon=ic::MAIL title="Contact".to_string() subtitle=content.contact.intro.clone() />
            <ul class=css::contactList>
                {content
                    .social
                    .iter()
                    .map(|link| {
                        let text = link.label.clone().unwrap_or_else(|| link.title.clone());
                        view! {
                            <li>
                                <a
                                    href=link.href.clone()
                                    class=css::contactLink
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <Icon icon=ic::for_link(link.icon) />
                                    <span>{text}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
