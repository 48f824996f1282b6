//! Data models for the site.
//!
//! - [`content`] - Static page content from `assets/content.toml`

mod content;

pub use content::{
    Achievement, Highlight, LinkIcon, Platform, Project, ProjectLinkKind, SocialLink, content,
};
