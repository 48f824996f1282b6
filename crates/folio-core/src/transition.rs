//! Page transition state machine.
//!
//! At most two subtrees are mounted: the incoming one (`Entering` or
//! `Active`) and, while a transition runs, the outgoing one (`Exiting`).
//! Only the incoming subtree is interactive. Every navigation gets a fresh
//! generation number, which is both the subtree key for the view layer and
//! the ticket for [`TransitionController::settle`]; a settle carrying an old
//! generation is ignored, so the newest destination always wins.

/// Lifecycle phase of a mounted subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Playing its enter animation.
    Entering,
    /// Settled and interactive.
    Active,
    /// Playing its exit animation; inert.
    Exiting,
}

/// A mounted page subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountedPage<K> {
    /// Unique per navigation; never reused.
    pub key: u64,
    pub screen: K,
    pub phase: Phase,
}

/// Enter/exit controller keyed by screen identity `K`.
#[derive(Clone, Debug)]
pub struct TransitionController<K> {
    incoming: Option<MountedPage<K>>,
    outgoing: Option<MountedPage<K>>,
    generation: u64,
}

impl<K: Copy + PartialEq> TransitionController<K> {
    /// Controller with nothing mounted.
    pub fn new() -> Self {
        Self {
            incoming: None,
            outgoing: None,
            generation: 0,
        }
    }

    /// Controller with `screen` already active (first paint, no animation).
    pub fn mounted_with(screen: K) -> Self {
        let mut controller = Self::new();
        controller.navigate(screen, false);
        controller
    }

    /// Starts a transition to `screen`.
    ///
    /// Returns the new generation, or `None` when `screen` is already the
    /// incoming subtree. Any subtree still exiting from an earlier transition
    /// is unmounted at once. Without `animate` the new subtree is active
    /// immediately and nothing exits.
    pub fn navigate(&mut self, screen: K, animate: bool) -> Option<u64> {
        if self.incoming.is_some_and(|page| page.screen == screen) {
            return None;
        }

        self.generation += 1;
        let key = self.generation;
        let previous = self.incoming.take();

        if animate {
            self.outgoing = previous.map(|page| MountedPage {
                phase: Phase::Exiting,
                ..page
            });
            self.incoming = Some(MountedPage {
                key,
                screen,
                phase: Phase::Entering,
            });
        } else {
            self.outgoing = None;
            self.incoming = Some(MountedPage {
                key,
                screen,
                phase: Phase::Active,
            });
        }

        Some(key)
    }

    /// Finishes the transition started as `generation`.
    ///
    /// Returns `false` (and changes nothing) for a superseded or already
    /// settled generation.
    pub fn settle(&mut self, generation: u64) -> bool {
        match self.incoming.as_mut() {
            Some(page) if page.key == generation && page.phase == Phase::Entering => {
                page.phase = Phase::Active;
                self.outgoing = None;
                true
            }
            _ => false,
        }
    }

    /// Mounted subtrees in paint order (outgoing first).
    pub fn mounted(&self) -> Vec<MountedPage<K>> {
        self.outgoing.into_iter().chain(self.incoming).collect()
    }

    /// The one subtree that takes keyboard and pointer input.
    pub fn interactive(&self) -> Option<MountedPage<K>> {
        self.incoming
    }

    /// Screen the controller is heading to (or showing).
    pub fn current(&self) -> Option<K> {
        self.incoming.map(|page| page.screen)
    }

    pub fn phase_of(&self, key: u64) -> Option<Phase> {
        self.mounted()
            .into_iter()
            .find(|page| page.key == key)
            .map(|page| page.phase)
    }

    pub fn is_settled(&self) -> bool {
        self.outgoing.is_none() && self.incoming.is_none_or(|page| page.phase == Phase::Active)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<K: Copy + PartialEq> Default for TransitionController<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mount_is_active() {
        let tc = TransitionController::mounted_with('a');
        assert_eq!(tc.current(), Some('a'));
        assert!(tc.is_settled());
        assert_eq!(tc.mounted().len(), 1);
        assert_eq!(tc.mounted()[0].phase, Phase::Active);
    }

    #[test]
    fn test_navigate_runs_exit_and_enter_together() {
        let mut tc = TransitionController::mounted_with('a');
        let generation = tc.navigate('b', true).unwrap();

        let mounted = tc.mounted();
        assert_eq!(mounted.len(), 2);
        assert_eq!((mounted[0].screen, mounted[0].phase), ('a', Phase::Exiting));
        assert_eq!((mounted[1].screen, mounted[1].phase), ('b', Phase::Entering));
        assert_eq!(tc.interactive().map(|p| p.screen), Some('b'));
        assert!(!tc.is_settled());

        assert!(tc.settle(generation));
        assert_eq!(tc.mounted().len(), 1);
        assert_eq!(tc.interactive().map(|p| p.phase), Some(Phase::Active));
        assert!(tc.is_settled());
    }

    #[test]
    fn test_newest_navigation_supersedes() {
        let mut tc = TransitionController::mounted_with('a');
        let stale = tc.navigate('x', true).unwrap();
        let fresh = tc.navigate('b', true).unwrap();
        assert!(fresh > stale);

        // 'a' is gone immediately, 'x' now exits, 'b' enters.
        let screens: Vec<_> = tc.mounted().iter().map(|p| (p.screen, p.phase)).collect();
        assert_eq!(screens, vec![('x', Phase::Exiting), ('b', Phase::Entering)]);

        assert!(!tc.settle(stale));
        assert_eq!(tc.current(), Some('b'));
        assert!(tc.settle(fresh));
        assert_eq!(tc.current(), Some('b'));
        assert!(tc.is_settled());
    }

    #[test]
    fn test_same_screen_is_noop() {
        let mut tc = TransitionController::mounted_with('a');
        assert_eq!(tc.navigate('a', true), None);
        assert!(tc.is_settled());

        let generation = tc.navigate('b', true).unwrap();
        assert_eq!(tc.navigate('b', true), None);
        assert!(tc.settle(generation));
    }

    #[test]
    fn test_back_to_exiting_screen_remounts_with_new_key() {
        let mut tc = TransitionController::mounted_with('a');
        let first_key = tc.interactive().unwrap().key;
        tc.navigate('b', true).unwrap();
        let back = tc.navigate('a', true).unwrap();

        assert_ne!(back, first_key);
        let screens: Vec<_> = tc.mounted().iter().map(|p| p.screen).collect();
        assert_eq!(screens, vec!['b', 'a']);
    }

    #[test]
    fn test_without_animation_switches_at_once() {
        let mut tc = TransitionController::mounted_with('a');
        tc.navigate('b', true).unwrap();
        let generation = tc.navigate('c', false).unwrap();

        assert!(tc.is_settled());
        assert_eq!(tc.mounted().len(), 1);
        assert_eq!(tc.phase_of(generation), Some(Phase::Active));
        assert!(!tc.settle(generation));
    }

    #[test]
    fn test_settle_twice_is_ignored() {
        let mut tc = TransitionController::mounted_with(1u8);
        let generation = tc.navigate(2, true).unwrap();
        assert!(tc.settle(generation));
        assert!(!tc.settle(generation));
    }

    #[test]
    fn test_phase_of_unknown_key() {
        let tc: TransitionController<u8> = TransitionController::new();
        assert_eq!(tc.phase_of(1), None);
        assert!(tc.is_settled());
        assert_eq!(tc.generation(), 0);
    }
}
