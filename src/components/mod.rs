//! UI components built with Leptos.
//!
//! - [`router`] - Path routing and in-app links (main entry point)
//! - [`layout`] - Navigation shell: background, chrome, content, footer
//! - [`background`] - Theme-dependent backdrop
//! - [`nav`] - Navigation bar and side panel
//! - [`transition`] - Enter/exit frames for the active page
//! - [`cards`] - Cards and lists shared by pages
//! - [`social`] - Social/contact link row
//! - [`footer`] - Site footer
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod background;
pub mod cards;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod nav;
pub mod router;
pub mod social;
pub mod transition;

pub use router::AppRouter;
