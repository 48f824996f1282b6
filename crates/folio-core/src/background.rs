//! Decorative page background.
//!
//! A soft grid with a few radial glows, one palette per theme. The result is
//! a plain value; rendering it has no side effects.

use crate::layer::Layer;
use crate::theme::ThemeMode;

/// Visual description of the background layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// Base fill color.
    pub color: &'static str,
    /// CSS `background-image` layers, top-most first.
    pub layers: &'static [&'static str],
    /// Tile size of the grid pattern.
    pub tile: &'static str,
}

const LIGHT: StyleDescriptor = StyleDescriptor {
    color: "hsl(210, 40%, 98%)",
    layers: &[
        "radial-gradient(ellipse at 10% 10%, hsla(160, 100%, 94%, 0.5), transparent)",
        "radial-gradient(ellipse at 90% 90%, hsla(200, 100%, 94%, 0.5), transparent)",
        "linear-gradient(hsl(210, 40%, 96%) 1.5px, transparent 1.5px)",
        "linear-gradient(to right, hsl(210, 40%, 96%) 1.5px, hsl(210, 40%, 98%) 1.5px)",
    ],
    tile: "40px 40px",
};

const DARK: StyleDescriptor = StyleDescriptor {
    color: "hsl(222, 47%, 11%)",
    layers: &[
        "radial-gradient(ellipse at 10% 10%, hsla(210, 96%, 11%, 0.8), transparent)",
        "radial-gradient(ellipse at 90% 90%, hsla(210, 96%, 11%, 0.8), transparent)",
        "radial-gradient(ellipse at 10% 90%, hsla(270, 90%, 15%, 0.5), transparent)",
        "radial-gradient(ellipse at 90% 10%, hsla(270, 90%, 15%, 0.5), transparent)",
        "linear-gradient(hsla(120, 47%, 15%, 1) 2px, transparent 2px)",
        "linear-gradient(to right, hsla(120, 47%, 15%, 1) 2px, hsl(222, 47%, 11%) 2px)",
    ],
    tile: "45px 45px",
};

/// Maps a theme to its background.
pub fn render(theme: ThemeMode) -> StyleDescriptor {
    match theme {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}

impl StyleDescriptor {
    /// Inline style for the background element.
    ///
    /// The element is fixed to the viewport, ignores pointer input and sits
    /// below every other layer, so it never affects layout.
    pub fn to_css(&self) -> String {
        format!(
            "position: fixed; inset: 0; z-index: {}; pointer-events: none; \
             transition: background-color 500ms; \
             background-color: {}; background-image: {}; background-size: {};",
            Layer::Background.z_index(),
            self.color,
            self.layers.join(", "),
            self.tile,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_theme_has_its_own_style() {
        assert_ne!(render(ThemeMode::Light), render(ThemeMode::Dark));
        assert_eq!(render(ThemeMode::Light).tile, "40px 40px");
        assert_eq!(render(ThemeMode::Dark).tile, "45px 45px");
    }

    #[test]
    fn test_render_is_idempotent() {
        for theme in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(render(theme), render(theme));
            assert_eq!(render(theme).to_css(), render(theme).to_css());
        }
    }

    #[test]
    fn test_css_keeps_background_out_of_layout() {
        let css = render(ThemeMode::Dark).to_css();
        assert!(css.contains("position: fixed"));
        assert!(css.contains("pointer-events: none"));
        assert!(css.contains("z-index: -50"));
        assert!(css.contains("background-color: hsl(222, 47%, 11%)"));
    }
}
