//! Root application module.
//!
//! Contains the main App component and the AppContext that owns the shell
//! state, following Leptos conventions.

use folio_core::{MountedPage, Screen, Shell, ShellEffect, ShellEvent, ThemeMode};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::AppRouter;
use crate::config::{DARK_SCHEME_QUERY, REDUCED_MOTION_QUERY};
use crate::utils::{LocalStore, dom};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Holds the single state cell of the site. Components read it through the
/// derived memos and change it only through [`AppContext::dispatch`], which
/// also performs whatever browser work the shell asks for.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    shell: RwSignal<Shell<LocalStore>>,

    /// Current theme.
    pub theme: Memo<ThemeMode>,
    /// Whether the side panel is open.
    pub side_nav_open: Memo<bool>,
    /// Screen the content region is showing or heading to.
    pub screen: Memo<Screen>,
    /// Mounted page subtrees, outgoing first.
    pub mounted: Memo<Vec<MountedPage<Screen>>>,
}

impl AppContext {
    /// Boots the shell from localStorage, the platform dark-mode signal and
    /// the current URL.
    ///
    /// The theme class is applied here, before anything is mounted, so the
    /// first paint already has the right theme.
    pub fn new() -> Self {
        let platform_dark = dom::media_matches(DARK_SCHEME_QUERY);
        let (shell, effects) = Shell::boot(LocalStore, platform_dark, &dom::current_path());
        let shell = RwSignal::new(shell);

        let ctx = Self {
            shell,
            theme: Memo::new(move |_| shell.with(|s| s.theme())),
            side_nav_open: Memo::new(move |_| shell.with(|s| s.side_nav_open())),
            screen: Memo::new(move |_| shell.with(|s| s.screen())),
            mounted: Memo::new(move |_| shell.with(|s| s.mounted())),
        };
        ctx.run(effects);
        ctx
    }

    /// Feeds one event to the shell and performs the resulting effects.
    pub fn dispatch(&self, event: ShellEvent) {
        let effects = self
            .shell
            .try_update(|shell| shell.dispatch(event))
            .unwrap_or_default();
        self.run(effects);
    }

    /// Pushes `path` onto the history and shows it.
    pub fn navigate(&self, path: &str) {
        dom::push_path(path);
        self.dispatch(ShellEvent::Navigate(path.to_string()));
    }

    pub fn toggle_theme(&self) {
        self.dispatch(ShellEvent::ToggleTheme);
    }

    pub fn toggle_side_nav(&self) {
        self.dispatch(ShellEvent::ToggleSideNav);
    }

    pub fn close_side_nav(&self) {
        self.dispatch(ShellEvent::CloseSideNav);
    }

    fn run(&self, effects: Vec<ShellEffect>) {
        for effect in effects {
            match effect {
                ShellEffect::ApplyTheme(mode) => {
                    dom::apply_theme_class(
                        mode.as_str(),
                        &[ThemeMode::Light.as_str(), ThemeMode::Dark.as_str()],
                    );
                }
                ShellEffect::ScheduleSettle {
                    generation,
                    after_ms,
                } => {
                    let ctx = *self;
                    Timeout::new(after_ms, move || {
                        ctx.dispatch(ShellEvent::TransitionSettled(generation));
                    })
                    .forget();
                }
                ShellEffect::ScrollToTop => dom::scroll_to_top(),
                ShellEffect::PersistenceUnavailable(err) => {
                    web_sys::console::warn_1(&format!("theme not saved: {}", err).into());
                }
            }
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Follows the reduced-motion preference
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);
    Effect::new(move || {
        ctx.dispatch(ShellEvent::SetReducedMotion(reduced_motion.get()));
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: var(--background);
                    color: var(--foreground);
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                        <p style="color: var(--muted-foreground); margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: var(--destructive);">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: var(--primary);
                                color: var(--primary-foreground);
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 0.5rem;
                                cursor: pointer;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
