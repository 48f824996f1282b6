//! Navigation shell.
//!
//! Stacks the background, the chrome (nav bar) and the content region in
//! that order, with the side panel as an overlay above them. The layout
//! itself is mounted once; only the children of the content region change
//! with the route.

use folio_core::Layer;
use leptos::prelude::*;

use crate::components::background::Background;
use crate::components::footer::Footer;
use crate::components::nav::{NavBar, SidePanel};

stylance::import_crate_style!(css, "src/components/layout.module.css");

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let chrome_z = format!("z-index: {};", Layer::Chrome.z_index());
    let content_z = format!("z-index: {};", Layer::Content.z_index());
    let overlay_z = format!("z-index: {};", Layer::Overlay.z_index());

    view! {
        <div class=css::root>
            <Background />

            <div class=css::chrome style=chrome_z>
                <NavBar />
            </div>

            <div class=css::overlay style=overlay_z>
                <SidePanel />
            </div>

            <main class=css::content style=content_z>
                {children()}
            </main>

            <Footer />
        </div>
    }
}
