//! End-to-end behavior of the shell across themes, routes and transitions.

use folio_core::{
    MemoryStore, PageId, Phase, RouteTable, Screen, Shell, ShellEffect, ShellEvent, ThemeMode,
    THEME_KEY,
};

fn settle_all(shell: &mut Shell<MemoryStore>, effects: Vec<ShellEffect>) {
    for effect in effects {
        if let ShellEffect::ScheduleSettle { generation, .. } = effect {
            shell.dispatch(ShellEvent::TransitionSettled(generation));
        }
    }
}

#[test]
fn persisted_dark_visit_projects_then_toggle() {
    let store = MemoryStore::with_entry(THEME_KEY, "dark");
    let (mut shell, _) = Shell::boot(store, Some(false), "/");
    assert_eq!(shell.theme(), ThemeMode::Dark);

    let effects = shell.dispatch(ShellEvent::Navigate("/projects".into()));
    settle_all(&mut shell, effects);
    assert_eq!(shell.screen(), Screen::Page(PageId::Projects));

    shell.dispatch(ShellEvent::ToggleTheme);
    assert_eq!(shell.screen(), Screen::Page(PageId::Projects));
    assert_eq!(shell.theme(), ThemeMode::Light);
    assert_eq!(shell.store().peek(THEME_KEY), Some("light"));
}

#[test]
fn double_toggle_restores_theme_and_store() {
    let (mut shell, _) = Shell::boot(MemoryStore::new(), None, "/");
    let original = shell.theme();

    shell.dispatch(ShellEvent::ToggleTheme);
    assert_eq!(shell.store().peek(THEME_KEY), Some(shell.theme().as_str()));
    shell.dispatch(ShellEvent::ToggleTheme);

    assert_eq!(shell.theme(), original);
    assert_eq!(shell.store().peek(THEME_KEY), Some(original.as_str()));
}

#[test]
fn initial_theme_follows_platform_signal() {
    let (dark, _) = Shell::boot(MemoryStore::new(), Some(true), "/");
    assert_eq!(dark.theme(), ThemeMode::Dark);

    let (light, _) = Shell::boot(MemoryStore::new(), None, "/");
    assert_eq!(light.theme(), ThemeMode::Light);
}

#[test]
fn newer_navigation_wins_over_in_flight_one() {
    let (mut shell, _) = Shell::boot(MemoryStore::new(), None, "/skills");

    let stale = shell.dispatch(ShellEvent::Navigate("/contact".into()));
    let fresh = shell.dispatch(ShellEvent::Navigate("/academics".into()));

    // Timers fire in order; the stale one must not settle anything.
    settle_all(&mut shell, stale);
    assert!(!shell.transition().is_settled());
    settle_all(&mut shell, fresh);

    assert_eq!(shell.screen(), Screen::Page(PageId::Academics));
    let mounted = shell.mounted();
    assert_eq!(mounted.len(), 1);
    assert_eq!(mounted[0].phase, Phase::Active);
}

#[test]
fn only_one_interactive_subtree_during_transition() {
    let (mut shell, _) = Shell::boot(MemoryStore::new(), None, "/");
    shell.dispatch(ShellEvent::Navigate("/volunteering".into()));

    let interactive: Vec<_> = shell
        .mounted()
        .into_iter()
        .filter(|page| page.phase != Phase::Exiting)
        .collect();
    assert_eq!(interactive.len(), 1);
    assert_eq!(interactive[0].screen, Screen::Page(PageId::Volunteering));
}

#[test]
fn side_panel_closes_on_navigation() {
    let (mut shell, _) = Shell::boot(MemoryStore::new(), None, "/");
    shell.dispatch(ShellEvent::ToggleSideNav);
    assert!(shell.side_nav_open());

    shell.dispatch(ShellEvent::Navigate("/skills".into()));
    assert!(!shell.side_nav_open());
}

#[test]
fn every_route_is_reachable_through_the_shell() {
    let table = RouteTable::site();
    for entry in table.entries() {
        let (shell, _) = Shell::boot(MemoryStore::new(), None, entry.path);
        assert_eq!(shell.screen(), Screen::Page(entry.page));
    }
}
