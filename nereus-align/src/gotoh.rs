//! Affine-gap global alignment (Gotoh, 1982) with a boundary-aware policy.
//!
//! Three coupled matrices, each `(m+1)×(n+1)`:
//!
//! - **M** — best score ending in a match/mismatch
//! - **I** — best score ending in a gap in the query (consuming target)
//! - **D** — best score ending in a gap in the target (consuming query)
//!
//! Opening a gap costs the policy's base penalty; extending one costs the
//! (usually smaller) extend penalty. Both go through the boundary test, so
//! free end-gaps stay free whether opened or extended.
//!
//! Each cell stores one packed byte: the predecessor state for each of the
//! three current states, 2 bits apiece. Traceback is a walk of the 3-state
//! automaton from whichever corner state scored best.

use nereus_core::Result;

use crate::gap::{best_of_three, GapPolicy};
use crate::scoring::{validate, ScoringScheme};
use crate::types::{Action, Alignment, PairwiseAligner, GAP};

/// Affine-gap global aligner.
#[derive(Debug, Clone)]
pub struct Gotoh {
    scoring: ScoringScheme,
    policy: GapPolicy,
    extend: i32,
}

/// Score assigned to unreachable DP states. Far enough below any reachable
/// score for any penalties and sequence lengths, with headroom so that
/// adding one substitution score or gap penalty cannot overflow.
const UNREACHABLE: i32 = i32::MIN / 2;

/// Pack three predecessor states (for M, I, D) into one byte, 2 bits each.
fn pack(for_match: Action, for_insert: Action, for_delete: Action) -> u8 {
    (for_delete as u8) << 4 | (for_insert as u8) << 2 | for_match as u8
}

/// Predecessor state recorded in `cell` for the given current state.
fn predecessor(cell: u8, state: Action) -> Action {
    match (cell >> (state as u8 * 2)) & 0b11 {
        0 => Action::Match,
        1 => Action::GapInFirst,
        _ => Action::GapInSecond,
    }
}

impl Gotoh {
    /// Create an affine-gap aligner. `policy.penalty` is the open penalty.
    pub fn new(scoring: ScoringScheme, policy: GapPolicy, extend: i32) -> Self {
        Self {
            scoring,
            policy,
            extend,
        }
    }

    /// Fill the three matrices; return the packed transition table, the
    /// corner state that scored best, and its score.
    fn fill(&self, query: &[u8], target: &[u8]) -> (Vec<u8>, Action, i32) {
        let m = query.len();
        let n = target.len();
        let rows = m + 1;
        let cols = n + 1;
        let idx = |i: usize, j: usize| -> usize { i * cols + j };

        let open = self.policy.penalty;

        let mut mat = vec![UNREACHABLE; rows * cols];
        let mut ins = vec![UNREACHABLE; rows * cols];
        let mut del = vec![UNREACHABLE; rows * cols];
        let mut trans = vec![0u8; rows * cols];

        mat[idx(0, 0)] = 0;

        // Boundary rows are reachable only through a gap-extension chain in
        // the matching gap matrix; the other two stay pinned at UNREACHABLE.
        for i in 1..rows {
            del[idx(i, 0)] = self
                .policy
                .scaled(0, n, open + (i as i32 - 1) * self.extend);
            trans[idx(i, 0)] = pack(
                Action::GapInSecond,
                Action::GapInSecond,
                Action::GapInSecond,
            );
        }
        for j in 1..cols {
            ins[idx(0, j)] = self
                .policy
                .scaled(0, m, open + (j as i32 - 1) * self.extend);
            trans[idx(0, j)] = pack(Action::GapInFirst, Action::GapInFirst, Action::GapInFirst);
        }

        for i in 1..rows {
            for j in 1..cols {
                let sub = self.scoring.score_pair(query[i - 1], target[j - 1]);

                let (m_val, m_from) = best_of_three(
                    mat[idx(i - 1, j - 1)] + sub,
                    ins[idx(i - 1, j - 1)] + sub,
                    del[idx(i - 1, j - 1)] + sub,
                );
                let (i_val, i_from) = best_of_three(
                    mat[idx(i, j - 1)] + self.policy.scaled(i, m, open),
                    ins[idx(i, j - 1)] + self.policy.scaled(i, m, self.extend),
                    del[idx(i, j - 1)] + self.policy.scaled(i, m, open),
                );
                let (d_val, d_from) = best_of_three(
                    mat[idx(i - 1, j)] + self.policy.scaled(j, n, open),
                    ins[idx(i - 1, j)] + self.policy.scaled(j, n, open),
                    del[idx(i - 1, j)] + self.policy.scaled(j, n, self.extend),
                );

                mat[idx(i, j)] = m_val;
                ins[idx(i, j)] = i_val;
                del[idx(i, j)] = d_val;
                trans[idx(i, j)] = pack(m_from, i_from, d_from);
            }
        }

        let (score, state) = best_of_three(
            mat[idx(m, n)],
            ins[idx(m, n)],
            del[idx(m, n)],
        );
        (trans, state, score)
    }
}

impl PairwiseAligner for Gotoh {
    fn align(&mut self, query: &[u8], target: &[u8]) -> Result<Alignment> {
        validate(&self.scoring, &[query, target])?;

        let m = query.len();
        let n = target.len();
        let cols = n + 1;
        let (trans, mut state, score) = self.fill(query, target);

        let mut aligned_query = Vec::new();
        let mut aligned_target = Vec::new();
        let (mut i, mut j) = (m, n);
        while i > 0 || j > 0 {
            // Read the predecessor before consuming the cell: the stored
            // transition belongs to the state we are *leaving*.
            let next = predecessor(trans[i * cols + j], state);
            match state {
                Action::Match => {
                    aligned_query.push(query[i - 1]);
                    aligned_target.push(target[j - 1]);
                    i -= 1;
                    j -= 1;
                }
                Action::GapInFirst => {
                    aligned_query.push(GAP);
                    aligned_target.push(target[j - 1]);
                    j -= 1;
                }
                Action::GapInSecond => {
                    aligned_query.push(query[i - 1]);
                    aligned_target.push(GAP);
                    i -= 1;
                }
                Action::Stop => unreachable!("affine traceback has no stop state"),
            }
            state = next;
        }
        aligned_query.reverse();
        aligned_target.reverse();

        Ok(Alignment {
            aligned_query,
            aligned_target,
            score,
        })
    }
}
