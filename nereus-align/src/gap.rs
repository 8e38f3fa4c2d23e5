//! Boundary-aware gap penalty policy and the shared three-way tie-break.
//!
//! The policy is what turns a pure global alignment into a semi-global /
//! free-end-gap alignment: a gap charged at position 0 or at the far end of
//! a sequence can be waived independently. It is position-dependent and
//! re-evaluated at every DP cell, and it is shared by all three engines.

use crate::types::Action;

/// Gap penalty configuration shared by all engines.
///
/// `penalty` is typically negative but no sign is assumed anywhere in the
/// recurrences; the engines only maximize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapPolicy {
    /// Penalty for one gap position (open penalty in affine mode).
    pub penalty: i32,
    /// Whether gaps at the start of a sequence are charged.
    pub charge_start: bool,
    /// Whether gaps at the end of a sequence are charged.
    pub charge_end: bool,
}

impl GapPolicy {
    /// Create a policy charging `penalty` per gap, with boundary switches.
    pub fn new(penalty: i32, charge_start: bool, charge_end: bool) -> Self {
        Self {
            penalty,
            charge_start,
            charge_end,
        }
    }

    /// Penalty for a gap at `pos` in a sequence of length `end`.
    ///
    /// Returns 0 for a free start gap (`pos == 0`) or a free end gap
    /// (`pos == end`), otherwise `self.penalty`.
    pub fn at(&self, pos: usize, end: usize) -> i32 {
        self.scaled(pos, end, self.penalty)
    }

    /// Like [`at`](Self::at), but charging `amount` instead of the base
    /// penalty. The affine engine routes both its open and extend penalties
    /// through this so that free end-gaps apply to either.
    pub fn scaled(&self, pos: usize, end: usize, amount: i32) -> i32 {
        if !self.charge_start && pos == 0 {
            return 0;
        }
        if !self.charge_end && pos == end {
            return 0;
        }
        amount
    }
}

/// Maximum of three candidates with the engines' shared tie-break order:
/// `a` (Match) beats `b` (GapInFirst) beats `c` (GapInSecond) on equal
/// values. Every engine must reproduce exactly this ordering.
pub fn best_of_three(a: i32, b: i32, c: i32) -> (i32, Action) {
    if a >= b && a >= c {
        (a, Action::Match)
    } else if b >= c {
        (b, Action::GapInFirst)
    } else {
        (c, Action::GapInSecond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_positions_always_charged() {
        let p = GapPolicy::new(-2, false, false);
        assert_eq!(p.at(1, 10), -2);
        assert_eq!(p.at(9, 10), -2);
    }

    #[test]
    fn free_start_gap() {
        let p = GapPolicy::new(-2, false, true);
        assert_eq!(p.at(0, 10), 0);
        assert_eq!(p.at(10, 10), -2);
    }

    #[test]
    fn free_end_gap() {
        let p = GapPolicy::new(-2, true, false);
        assert_eq!(p.at(0, 10), -2);
        assert_eq!(p.at(10, 10), 0);
    }

    #[test]
    fn both_charged() {
        let p = GapPolicy::new(-2, true, true);
        assert_eq!(p.at(0, 10), -2);
        assert_eq!(p.at(5, 10), -2);
        assert_eq!(p.at(10, 10), -2);
    }

    #[test]
    fn scaled_substitutes_amount() {
        let p = GapPolicy::new(-10, false, true);
        assert_eq!(p.scaled(0, 10, -1), 0);
        assert_eq!(p.scaled(3, 10, -1), -1);
    }

    #[test]
    fn positive_penalties_are_not_special() {
        let p = GapPolicy::new(3, true, true);
        assert_eq!(p.at(1, 4), 3);
    }

    #[test]
    fn tie_break_prefers_match_then_first_gap() {
        assert_eq!(best_of_three(1, 1, 1), (1, Action::Match));
        assert_eq!(best_of_three(0, 1, 1), (1, Action::GapInFirst));
        assert_eq!(best_of_three(0, 0, 1), (1, Action::GapInSecond));
        assert_eq!(best_of_three(2, 1, 0), (2, Action::Match));
        assert_eq!(best_of_three(-5, -3, -4), (-3, Action::GapInFirst));
    }
}
