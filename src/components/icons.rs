//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::LinkIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as Achievements, LuCode as Code, LuExternalLink as ExternalLink,
        LuFileText as FileText, LuFolder as Projects, LuGithub as Github,
        LuGraduationCap as Education, LuHeart as Volunteering, LuLinkedin as Linkedin,
        LuMail as Mail, LuMapPin as NotFound, LuMenu as Menu, LuMoon as Moon, LuPhone as Phone,
        LuSun as Sun, LuWrench as Skills, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsCodeSlash as Code, BsEnvelope as Mail,
        BsFileEarmarkText as FileText, BsFolderFill as Projects, BsGeoAltFill as NotFound,
        BsGithub as Github, BsHeart as Volunteering, BsJournalText as Achievements,
        BsLinkedin as Linkedin, BsList as Menu, BsMoon as Moon, BsMortarboard as Education,
        BsSun as Sun, BsTelephone as Phone, BsWrench as Skills, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(GITHUB, Github);
themed_icon!(LINKEDIN, Linkedin);
themed_icon!(MAIL, Mail);
themed_icon!(PHONE, Phone);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(EDUCATION, Education);
themed_icon!(ACHIEVEMENTS, Achievements);
themed_icon!(PROJECTS, Projects);
themed_icon!(SKILLS, Skills);
themed_icon!(VOLUNTEERING, Volunteering);
themed_icon!(CODE, Code);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(NOT_FOUND, NotFound);

/// Icon for a content link.
pub fn for_link(icon: LinkIcon) -> Icon {
    match icon {
        LinkIcon::Github => GITHUB,
        LinkIcon::Linkedin => LINKEDIN,
        LinkIcon::Mail => MAIL,
        LinkIcon::Phone => PHONE,
        LinkIcon::External => EXTERNAL_LINK,
    }
}
