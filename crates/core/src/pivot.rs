//! Pivot selection state, mutated only by discrete input actions.

use tui_spin_types::SpinAction;

use crate::geometry::vertex_count;

/// Tracks which vertex the square currently rotates about.
///
/// Lives for the whole session; there is no reset. Anything other than a
/// valid pivot selection leaves the state untouched (silently ignored by
/// design, never an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotSelector {
    index: usize,
}

impl PivotSelector {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn apply(&mut self, action: SpinAction) {
        match action {
            SpinAction::SelectPivot(i) if i < vertex_count() => self.index = i,
            SpinAction::SelectPivot(_) => {}
        }
    }
}

impl Default for PivotSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_vertex_zero() {
        assert_eq!(PivotSelector::new().current(), 0);
    }

    #[test]
    fn selects_each_vertex_regardless_of_prior_state() {
        let mut pivot = PivotSelector::new();
        for i in [2usize, 0, 3, 1, 3, 0] {
            pivot.apply(SpinAction::SelectPivot(i));
            assert_eq!(pivot.current(), i);
        }
    }

    #[test]
    fn out_of_range_selection_is_a_no_op() {
        let mut pivot = PivotSelector::new();
        pivot.apply(SpinAction::SelectPivot(2));
        pivot.apply(SpinAction::SelectPivot(4));
        pivot.apply(SpinAction::SelectPivot(usize::MAX));
        assert_eq!(pivot.current(), 2);
    }
}
