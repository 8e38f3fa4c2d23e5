//! Full-matrix global (and optionally local) alignment with a simple,
//! boundary-aware gap penalty.
//!
//! Builds the complete `(m+1)×(n+1)` score matrix plus a traceback matrix
//! of [`Action`]s, then reconstructs one optimal alignment by walking the
//! traceback from the end cell to the origin. Quadratic time and space.
//!
//! In local mode (Smith-Waterman-style), any cell that would go negative is
//! clamped to 0 and marked [`Action::Stop`]; traceback starts from the
//! matrix maximum instead of the bottom-right corner and ends at the first
//! `Stop` (or the origin).

use nereus_core::Result;

use crate::gap::{best_of_three, GapPolicy};
use crate::scoring::{validate, ScoringScheme};
use crate::types::{Action, Alignment, PairwiseAligner, GAP};

/// Full-matrix aligner with a simple gap penalty.
#[derive(Debug, Clone)]
pub struct NeedlemanWunsch {
    scoring: ScoringScheme,
    policy: GapPolicy,
    allow_local: bool,
}

impl NeedlemanWunsch {
    /// Create a global aligner.
    pub fn new(scoring: ScoringScheme, policy: GapPolicy) -> Self {
        Self {
            scoring,
            policy,
            allow_local: false,
        }
    }

    /// Create a local aligner (scores clamped at zero).
    pub fn local(scoring: ScoringScheme, policy: GapPolicy) -> Self {
        Self {
            scoring,
            policy,
            allow_local: true,
        }
    }

    /// Fill the score and traceback matrices and pick the end cell.
    ///
    /// Returns the traceback matrix, the end cell, and the score there.
    fn fill(&self, query: &[u8], target: &[u8]) -> (Vec<Action>, (usize, usize), i32) {
        let m = query.len();
        let n = target.len();
        let rows = m + 1;
        let cols = n + 1;

        let mut score = vec![0i32; rows * cols];
        let mut actions = vec![Action::Match; rows * cols];
        let idx = |i: usize, j: usize| -> usize { i * cols + j };

        // Boundary row/column: repeated application of the gap policy along
        // the edge, action fixed to the corresponding gap type.
        for j in 1..cols {
            score[idx(0, j)] = score[idx(0, j - 1)] + self.policy.at(0, m);
            actions[idx(0, j)] = Action::GapInFirst;
        }
        for i in 1..rows {
            score[idx(i, 0)] = score[idx(i - 1, 0)] + self.policy.at(0, n);
            actions[idx(i, 0)] = Action::GapInSecond;
        }

        for i in 1..rows {
            for j in 1..cols {
                let (mut val, mut act) = best_of_three(
                    score[idx(i - 1, j - 1)] + self.scoring.score_pair(query[i - 1], target[j - 1]),
                    score[idx(i, j - 1)] + self.policy.at(i, m),
                    score[idx(i - 1, j)] + self.policy.at(j, n),
                );
                if self.allow_local && val < 0 {
                    val = 0;
                    act = Action::Stop;
                }
                score[idx(i, j)] = val;
                actions[idx(i, j)] = act;
            }
        }

        let (mut end_i, mut end_j) = (m, n);
        if self.allow_local {
            // Row-major scan with `>=`: the *last* maximum wins. Kept as the
            // documented tie-break for local traceback starts.
            let mut max_val = i32::MIN;
            for i in 0..rows {
                for j in 0..cols {
                    if score[idx(i, j)] >= max_val {
                        max_val = score[idx(i, j)];
                        end_i = i;
                        end_j = j;
                    }
                }
            }
        }

        let end_score = score[idx(end_i, end_j)];
        (actions, (end_i, end_j), end_score)
    }
}

impl PairwiseAligner for NeedlemanWunsch {
    fn align(&mut self, query: &[u8], target: &[u8]) -> Result<Alignment> {
        validate(&self.scoring, &[query, target])?;

        let n = target.len();
        let cols = n + 1;
        let (actions, (end_i, end_j), score) = self.fill(query, target);

        // Traceback walks end → origin, one symbol pair per step.
        let mut aligned_query = Vec::new();
        let mut aligned_target = Vec::new();
        let (mut i, mut j) = (end_i, end_j);
        while i > 0 || j > 0 {
            match actions[i * cols + j] {
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
                Action::Stop => break,
            }
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
