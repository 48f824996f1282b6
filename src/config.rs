//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the site.
//! Page content is loaded at compile time using `include_str!`.

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Site content: bios, projects, education, links.
pub const CONTENT_TOML: &str = include_str!("../assets/content.toml");

// =============================================================================
// Site Metadata
// =============================================================================

/// Name shown in the navigation bar and footer.
pub const SITE_NAME: &str = "Ruel Sinha";

/// Year shown in the footer copyright line.
pub const COPYRIGHT_YEAR: u16 = 2025;

// =============================================================================
// Theme
// =============================================================================

/// Media query for the platform dark-mode signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Media query for the reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// =============================================================================
// Page Transitions
// =============================================================================

/// Page transition parameters. The CSS in `transition.module.css` mirrors these.
pub mod transition {
    /// Length of the enter/exit window.
    pub const DURATION_MS: u32 = folio_core::shell::TRANSITION_MS;
    /// Vertical offset a page enters from, in pixels.
    pub const ENTER_OFFSET_PX: i32 = 20;
    /// Vertical offset a page exits to, in pixels.
    pub const EXIT_OFFSET_PX: i32 = -20;
}

// =============================================================================
// Layout
// =============================================================================

/// Below this width the nav links collapse into the side panel.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the site.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
