//! Site pages.
//!
//! Each page is a no-argument component reading from [`content`](crate::models::content).

mod about;
mod academics;
mod contact;
mod not_found;
mod projects;
mod skills;
mod volunteering;

use folio_core::{PageId, Screen};
use leptos::prelude::*;

pub use about::About;
pub use academics::Academics;
pub use contact::Contact;
pub use not_found::NotFound;
pub use projects::Projects;
pub use skills::Skills;
pub use volunteering::Volunteering;

/// View for a screen of the content region.
pub fn render(screen: Screen) -> AnyView {
    match screen {
        Screen::Page(PageId::About) => view! { <About /> }.into_any(),
        Screen::Page(PageId::Skills) => view! { <Skills /> }.into_any(),
        Screen::Page(PageId::Academics) => view! { <Academics /> }.into_any(),
        Screen::Page(PageId::Projects) => view! { <Projects /> }.into_any(),
        Screen::Page(PageId::Contact) => view! { <Contact /> }.into_any(),
        Screen::Page(PageId::Volunteering) => view! { <Volunteering /> }.into_any(),
        Screen::NotFound => view! { <NotFound /> }.into_any(),
    }
}
