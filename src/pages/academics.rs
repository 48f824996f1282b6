use leptos::prelude::*;

use crate::components::cards::{AchievementCard, SectionHeading};
use crate::components::icons as ic;
use crate::models::content;

stylance::import_crate_style!(css, "src/pages/section.module.css");

/// Education records, then achievements (omitted while there are none).
#[component]
pub fn Academics() -> impl IntoView {
    let academics = &content().academics;

    view! {
        <div class=css::page>
            <SectionHeading icon=ic::EDUCATION title=academics.education_heading.clone() />
            <div class=css::column>
                {academics
                    .education
                    .iter()
                    .enumerate()
                    .map(|(index, record)| view! { <AchievementCard achievement=record index=index /> })
                    .collect_view()}
            </div>

            {(!academics.achievements.is_empty()).then(|| view! {
                <SectionHeading icon=ic::ACHIEVEMENTS title=academics.achievements_heading.clone() />
                <div class=css::column>
                    {academics
                        .achievements
                        .iter()
                        .enumerate()
                        .map(|(index, award)| view! { <AchievementCard achievement=award index=index /> })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}
