//! Site footer.

use leptos::prelude::*;

use crate::components::social::SocialLinks;
use crate::config::{COPYRIGHT_YEAR, SITE_NAME};
use crate::models::content;

stylance::import_crate_style!(css, "src/components/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <div class=css::copyright>
                    {format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, SITE_NAME)}
                </div>
                <SocialLinks links=content().social.as_slice() link_class=css::link />
            </div>
        </footer>
    }
}
