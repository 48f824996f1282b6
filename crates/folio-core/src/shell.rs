//! The navigation shell reducer.
//!
//! [`Shell`] owns the only mutable top-level state of the site: the theme,
//! whether the side panel is open, the current location and the page
//! transition. The view layer feeds it [`ShellEvent`]s and performs the
//! returned [`ShellEffect`]s; it never mutates that state directly.
//!
//! Theme and navigation are independent: a theme change leaves an in-flight
//! transition alone and a navigation never touches the theme.

use crate::route::{RouteTable, Screen};
use crate::storage::{KeyValueStore, StorageError};
use crate::theme::{ThemeMode, ThemePreference};
use crate::transition::{MountedPage, TransitionController};

/// Length of the enter/exit window in milliseconds.
pub const TRANSITION_MS: u32 = 500;

/// Inputs to the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    /// The location changed to this path.
    Navigate(String),
    ToggleTheme,
    SetTheme(ThemeMode),
    ToggleSideNav,
    CloseSideNav,
    /// The transition with this generation finished animating.
    TransitionSettled(u64),
    /// The user's reduced-motion preference changed.
    SetReducedMotion(bool),
}

/// Work for the view layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEffect {
    /// Set the document-level theme flag.
    ApplyTheme(ThemeMode),
    /// Deliver `TransitionSettled(generation)` after `after_ms`.
    ScheduleSettle { generation: u64, after_ms: u32 },
    /// Reset the scroll position for a new page.
    ScrollToTop,
    /// The theme could not be saved; it stays in memory only.
    PersistenceUnavailable(StorageError),
}

/// Top-level UI state of the site.
#[derive(Clone, Debug)]
pub struct Shell<S> {
    preference: ThemePreference<S>,
    routes: RouteTable,
    theme: ThemeMode,
    side_nav_open: bool,
    reduced_motion: bool,
    location: String,
    transition: TransitionController<Screen>,
}

impl<S: KeyValueStore> Shell<S> {
    /// Builds the startup state.
    ///
    /// The theme comes from `store` or the platform signal and is written
    /// back at once. The first screen is mounted without an enter animation.
    /// The returned effects start with [`ShellEffect::ApplyTheme`] so the
    /// caller can set the theme before first paint.
    pub fn boot(
        store: S,
        platform_dark: Option<bool>,
        location: &str,
    ) -> (Self, Vec<ShellEffect>) {
        let mut preference = ThemePreference::new(store);
        let theme = preference.initial(platform_dark);
        let routes = RouteTable::site();
        let screen = routes.screen_for(location);

        let mut effects = vec![ShellEffect::ApplyTheme(theme)];
        if let Err(err) = preference.persist(theme) {
            effects.push(ShellEffect::PersistenceUnavailable(err));
        }

        let shell = Self {
            preference,
            routes,
            theme,
            side_nav_open: false,
            reduced_motion: false,
            location: location.to_string(),
            transition: TransitionController::mounted_with(screen),
        };
        (shell, effects)
    }

    /// Applies one event.
    pub fn dispatch(&mut self, event: ShellEvent) -> Vec<ShellEffect> {
        match event {
            ShellEvent::Navigate(path) => self.navigate(path),
            ShellEvent::ToggleTheme => self.set_theme(self.theme.toggled()),
            ShellEvent::SetTheme(mode) => self.set_theme(mode),
            ShellEvent::ToggleSideNav => {
                self.side_nav_open = !self.side_nav_open;
                Vec::new()
            }
            ShellEvent::CloseSideNav => {
                self.side_nav_open = false;
                Vec::new()
            }
            ShellEvent::TransitionSettled(generation) => {
                self.transition.settle(generation);
                Vec::new()
            }
            ShellEvent::SetReducedMotion(reduced) => {
                self.reduced_motion = reduced;
                Vec::new()
            }
        }
    }

    fn navigate(&mut self, path: String) -> Vec<ShellEffect> {
        self.side_nav_open = false;
        if path == self.location {
            return Vec::new();
        }

        let screen = self.routes.screen_for(&path);
        self.location = path;

        let mut effects = vec![ShellEffect::ScrollToTop];
        let animate = !self.reduced_motion;
        if let Some(generation) = self.transition.navigate(screen, animate)
            && animate
        {
            effects.push(ShellEffect::ScheduleSettle {
                generation,
                after_ms: TRANSITION_MS,
            });
        }
        effects
    }

    fn set_theme(&mut self, mode: ThemeMode) -> Vec<ShellEffect> {
        if mode == self.theme {
            return Vec::new();
        }
        self.theme = mode;

        let mut effects = vec![ShellEffect::ApplyTheme(mode)];
        if let Err(err) = self.preference.persist(mode) {
            effects.push(ShellEffect::PersistenceUnavailable(err));
        }
        effects
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn side_nav_open(&self) -> bool {
        self.side_nav_open
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Screen currently shown (or entering).
    pub fn screen(&self) -> Screen {
        self.transition.current().unwrap_or(Screen::NotFound)
    }

    pub fn transition(&self) -> &TransitionController<Screen> {
        &self.transition
    }

    pub fn mounted(&self) -> Vec<MountedPage<Screen>> {
        self.transition.mounted()
    }

    pub fn store(&self) -> &S {
        self.preference.store()
    }
}
