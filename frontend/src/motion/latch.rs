/// One-shot visibility latch. `Pending` moves to `Revealed` the first time
/// the element is seen and never moves back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Feeds one intersection report. Returns `true` only on the transition,
    /// which is the caller's cue to stop observing.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match self {
            Self::Pending if is_intersecting => {
                *self = Self::Revealed;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_on_first_intersection_only() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_revealed());

        assert!(state.observe(true));
        assert!(state.is_revealed());

        assert!(!state.observe(true), "second report is not a transition");
    }

    #[test]
    fn leaving_the_viewport_never_reverts() {
        let mut state = RevealState::Pending;
        state.observe(true);
        for seen in [false, true, false, false] {
            state.observe(seen);
            assert_eq!(state, RevealState::Revealed);
        }
    }
}
