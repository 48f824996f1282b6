use leptos::prelude::*;

use crate::components::cards::{HighlightList, PlatformCard, SectionHeading, TagList};
use crate::components::icons as ic;
use crate::models::content;

stylance::import_crate_style!(css, "src/pages/section.module.css");

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &content().skills;

    view! {
        <div class=css::page>
            <SectionHeading icon=ic::SKILLS title="Skills".to_string() subtitle=skills.intro.clone() />

            <div class=css::column>
                {skills
                    .groups
                    .iter()
                    .map(|group| view! {
                        <section class=css::group>
                            <h2 class=css::groupTitle>{group.name.clone()}</h2>
                            <TagList tags=group.items.as_slice() />
                        </section>
                    })
                    .collect_view()}
            </div>

            {(!skills.platforms.is_empty()).then(|| view! {
                <div class=css::grid>
                    {skills
                        .platforms
                        .iter()
                        .enumerate()
                        .map(|(index, platform)| view! { <PlatformCard platform=platform index=index /> })
                        .collect_view()}
                </div>
            })}

            {(!skills.highlights.is_empty()).then(|| view! {
                <div class=css::column>
                    <HighlightList title="Key Highlights" items=skills.highlights.as_slice() />
                </div>
            })}
        </div>
    }
}
