use leptos::prelude::*;

use crate::components::cards::{ProjectCard, SectionHeading};
use crate::components::icons as ic;
use crate::models::content;

stylance::import_crate_style!(css, "src/pages/section.module.css");

#[component]
pub fn Projects() -> impl IntoView {
    let projects = &content().projects;

    view! {
        <div class=css::page>
            <SectionHeading icon=ic::PROJECTS title="Projects".to_string() subtitle=projects.intro.clone() />
            <div class=css::grid>
                {projects
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                    .collect_view()}
            </div>
        </div>
    }
}
