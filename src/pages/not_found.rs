use folio_core::PageId;
use leptos::prelude::*;

use crate::components::cards::SectionHeading;
use crate::components::icons as ic;
use crate::components::router::PageLink;

stylance::import_crate_style!(css, "src/pages/section.module.css");

/// Fallback for paths outside the route table.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class=css::page>
            <SectionHeading
                icon=ic::NOT_FOUND
                title="Page not found".to_string()
                subtitle="There is nothing at this address.".to_string()
            />
            <PageLink page=PageId::About link_class=css::contactLink>"Back to the start"</PageLink>
        </div>
    }
}
