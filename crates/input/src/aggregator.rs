use zerog_common::{ControllerState, Intent};

/// Edge reported by an on-screen button. Pointer-leave counts as a release so
/// a finger sliding off a button never leaves the intent stuck on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    Press,
    Release,
    Leave,
}

impl ButtonEdge {
    pub fn is_active(self) -> bool {
        matches!(self, ButtonEdge::Press)
    }
}

/// Single owner of the current intent state.
///
/// Every producer (keyboard, HUD buttons) writes through [`set_intent`];
/// the simulation reads a copy once per tick via [`snapshot`].
///
/// [`set_intent`]: InputAggregator::set_intent
/// [`snapshot`]: InputAggregator::snapshot
#[derive(Debug, Clone, Default)]
pub struct InputAggregator {
    state: ControllerState,
}

impl InputAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_intent(&mut self, intent: Intent, active: bool) {
        if self.state.get(intent) != active {
            tracing::trace!(%intent, active, "intent changed");
        }
        self.state.set(intent, active);
    }

    pub fn button(&mut self, intent: Intent, edge: ButtonEdge) {
        self.set_intent(intent, edge.is_active());
    }

    /// Clear every intent, e.g. when the host window loses focus.
    pub fn release_all(&mut self) {
        self.state = ControllerState::default();
    }

    pub fn snapshot(&self) -> ControllerState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_latest_value_per_key() {
        let mut agg = InputAggregator::new();
        agg.set_intent(Intent::Forward, true);
        agg.set_intent(Intent::Up, true);
        agg.set_intent(Intent::Forward, false);
        agg.set_intent(Intent::Left, true);
        agg.set_intent(Intent::Up, true);

        let s = agg.snapshot();
        assert!(!s.forward);
        assert!(s.up);
        assert!(s.left);
        assert!(!s.right && !s.backward && !s.down);
    }

    #[test]
    fn interleaving_across_keys_is_irrelevant() {
        let writes = [
            (Intent::Right, true),
            (Intent::Down, true),
            (Intent::Right, false),
            (Intent::Backward, true),
            (Intent::Down, false),
            (Intent::Right, true),
        ];

        let mut forward = InputAggregator::new();
        for (i, a) in writes {
            forward.set_intent(i, a);
        }

        // Same per-key order, keys grouped differently.
        let mut grouped = InputAggregator::new();
        for key in Intent::ALL {
            for (i, a) in writes.iter().filter(|(i, _)| *i == key) {
                grouped.set_intent(*i, *a);
            }
        }

        assert_eq!(forward.snapshot(), grouped.snapshot());
    }

    #[test]
    fn overlapping_presses_do_not_count() {
        let mut agg = InputAggregator::new();
        agg.set_intent(Intent::Forward, true);
        agg.set_intent(Intent::Forward, true);
        agg.set_intent(Intent::Forward, false);
        assert!(!agg.snapshot().forward);
    }

    #[test]
    fn button_leave_releases() {
        let mut agg = InputAggregator::new();
        agg.button(Intent::Up, ButtonEdge::Press);
        assert!(agg.snapshot().up);
        agg.button(Intent::Up, ButtonEdge::Leave);
        assert!(!agg.snapshot().up);
    }

    #[test]
    fn release_all_clears_everything() {
        let mut agg = InputAggregator::new();
        for i in Intent::ALL {
            agg.set_intent(i, true);
        }
        agg.release_all();
        assert!(agg.snapshot().is_idle());
    }
}
