//! Linear-space global alignment (Hirschberg's divide and conquer).
//!
//! Produces the same optimal score as the full-matrix engine in global mode
//! while never materializing a matrix: each recursion level bisects the
//! target's column range, computes one forward and one backward score vector
//! over the query rows, finds the optimal crossing point at the middle
//! column, and recurses on the two sub-rectangles. Space is
//! O(len(query)), time stays O(len(query)·len(target)).
//!
//! The boundary-aware gap policy is threaded through every penalty lookup
//! with absolute coordinates, so free end-gaps survive the bisection.

use nereus_core::Result;

use crate::gap::{best_of_three, GapPolicy};
use crate::scoring::{validate, ScoringScheme};
use crate::types::{Action, Alignment, PairwiseAligner, GAP};

/// A cell position in the implicit DP matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Coord {
    i: usize,
    j: usize,
}

/// Linear-space global aligner.
///
/// Holds two scratch vectors sized to the query length, grown on demand and
/// reused across calls. One engine instance must not be shared between
/// concurrent `align` calls.
#[derive(Debug, Clone)]
pub struct Hirschberg {
    scoring: ScoringScheme,
    policy: GapPolicy,
    up: Vec<i32>,
    down: Vec<i32>,
}

impl Hirschberg {
    /// Create a linear-space global aligner.
    pub fn new(scoring: ScoringScheme, policy: GapPolicy) -> Self {
        Self {
            scoring,
            policy,
            up: Vec::new(),
            down: Vec::new(),
        }
    }

    /// Action list for the rectangle `[f, t)`, found by recursive bisection.
    fn solve(&mut self, query: &[u8], target: &[u8], f: Coord, t: Coord) -> Vec<Action> {
        // No columns left: consume the remaining query rows against gaps.
        if f.j == t.j {
            return vec![Action::GapInSecond; t.i - f.i];
        }

        let m = query.len();
        let size = t.j - f.j;
        let up_size = size / 2;
        let down_size = (size - (size + 1) % 2) / 2;

        // `mid` is the column whose target symbol the crossing consumes:
        // forward scores end at DP column `mid`, backward scores at `mid+1`.
        let mid = f.j + up_size;
        self.forward(query, target, f, Coord { i: t.i, j: mid });
        self.backward(query, target, Coord { i: f.i, j: t.j - down_size }, t);

        // Gap crossing: stay on row `i`, consume target[mid] against a gap.
        // First maximum wins within this scan.
        let mut best_i = f.i;
        let mut best_act = Action::GapInFirst;
        let mut best = self.up[f.i] + self.down[f.i] + self.policy.at(f.i, m);
        for k in f.i..=t.i {
            let current = self.up[k] + self.down[k] + self.policy.at(k, m);
            if current > best {
                best_i = k;
                best = current;
            }
        }

        // Match crossing: consume query[k] and target[mid] together.
        // Preferred over an equally good gap crossing.
        for k in f.i..t.i {
            let current =
                self.up[k] + self.down[k + 1] + self.scoring.score_pair(query[k], target[mid]);
            if current >= best {
                best_i = k;
                best = current;
                best_act = Action::Match;
            }
        }

        let t_next = Coord { i: best_i, j: mid };
        let f_next = Coord {
            i: best_i + usize::from(best_act == Action::Match),
            j: mid + 1,
        };

        let mut actions = self.solve(query, target, f, t_next);
        actions.push(best_act);
        actions.extend(self.solve(query, target, f_next, t));
        actions
    }

    /// Forward score vector: `up[i]` = best score of a path from `f` to
    /// `(i, t.j)`. Keeps only one column in memory.
    fn forward(&mut self, query: &[u8], target: &[u8], f: Coord, t: Coord) {
        let m = query.len();
        let n = target.len();

        self.up[f.i] = 0;
        for i in f.i + 1..=t.i {
            self.up[i] = self.up[i - 1] + self.policy.at(f.j, n);
        }

        for j in f.j..t.j {
            // Advance the vector from DP column j to column j + 1.
            let mut diag = self.up[f.i];
            self.up[f.i] += self.policy.at(f.i, m);
            for i in f.i + 1..=t.i {
                let (val, _) = best_of_three(
                    diag + self.scoring.score_pair(query[i - 1], target[j]),
                    self.up[i] + self.policy.at(i, m),
                    self.up[i - 1] + self.policy.at(j + 1, n),
                );
                diag = self.up[i];
                self.up[i] = val;
            }
        }
    }

    /// Backward score vector: `down[i]` = best score of a path from
    /// `(i, f.j)` to `t`. Mirror of [`forward`](Self::forward).
    fn backward(&mut self, query: &[u8], target: &[u8], f: Coord, t: Coord) {
        let m = query.len();
        let n = target.len();

        self.down[t.i] = 0;
        for i in (f.i..t.i).rev() {
            self.down[i] = self.down[i + 1] + self.policy.at(t.j, n);
        }

        for j in (f.j + 1..=t.j).rev() {
            // Retreat the vector from DP column j to column j - 1.
            let mut diag = self.down[t.i];
            self.down[t.i] += self.policy.at(t.i, m);
            for i in (f.i..t.i).rev() {
                let (val, _) = best_of_three(
                    diag + self.scoring.score_pair(query[i], target[j - 1]),
                    self.down[i] + self.policy.at(i, m),
                    self.down[i + 1] + self.policy.at(j - 1, n),
                );
                diag = self.down[i];
                self.down[i] = val;
            }
        }
    }
}

impl PairwiseAligner for Hirschberg {
    fn align(&mut self, query: &[u8], target: &[u8]) -> Result<Alignment> {
        validate(&self.scoring, &[query, target])?;

        let m = query.len();
        let n = target.len();
        if self.up.len() < m + 1 {
            self.up.resize(m + 1, 0);
            self.down.resize(m + 1, 0);
        }

        let actions = self.solve(
            query,
            target,
            Coord { i: 0, j: 0 },
            Coord { i: m, j: n },
        );

        // Replay the actions front-to-back, recomputing the score with the
        // same boundary-aware penalties the bisection used.
        let mut aligned_query = Vec::with_capacity(actions.len());
        let mut aligned_target = Vec::with_capacity(actions.len());
        let mut score = 0i32;
        let (mut i, mut j) = (0usize, 0usize);
        for action in actions {
            match action {
                Action::Match => {
                    aligned_query.push(query[i]);
                    aligned_target.push(target[j]);
                    score += self.scoring.score_pair(query[i], target[j]);
                    i += 1;
                    j += 1;
                }
                Action::GapInFirst => {
                    aligned_query.push(GAP);
                    aligned_target.push(target[j]);
                    score += self.policy.at(i, m);
                    j += 1;
                }
                Action::GapInSecond => {
                    aligned_query.push(query[i]);
                    aligned_target.push(GAP);
                    score += self.policy.at(j, n);
                    i += 1;
                }
                Action::Stop => unreachable!("linear-space engine is global only"),
            }
        }

        Ok(Alignment {
            aligned_query,
            aligned_target,
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::needleman_wunsch::NeedlemanWunsch;

    fn run(charge_start: bool, charge_end: bool, a: &str, b: &str) -> Alignment {
        let mut aligner = Hirschberg::new(
            ScoringScheme::dna(),
            GapPolicy::new(-10, charge_start, charge_end),
        );
        aligner.align(a.as_bytes(), b.as_bytes()).unwrap()
    }

    fn strip_gaps(seq: &[u8]) -> Vec<u8> {
        seq.iter().copied().filter(|&b| b != GAP).collect()
    }

    #[test]
    fn exact_match() {
        let result = run(true, true, "AAAA", "AAAA");
        assert_eq!(result.aligned_query, b"AAAA");
        assert_eq!(result.aligned_target, b"AAAA");
        assert_eq!(result.score, 20);
    }

    #[test]
    fn unique_optimum_cases() {
        let result = run(true, true, "AATCG", "AACG");
        assert_eq!(result.aligned_query, b"AATCG");
        assert_eq!(result.aligned_target, b"AA-CG");
        assert_eq!(result.score, 10);

        let result = run(true, true, "AAAT", "AAAA");
        assert_eq!(result.aligned_query, b"AAAT");
        assert_eq!(result.aligned_target, b"AAAA");
        assert_eq!(result.score, 11);
    }

    #[test]
    fn boundary_policy_cases() {
        // Leading gaps free: b slides to the end of a.
        let result = run(false, true, "AATTTTTTAATCGGGGGGGG", "AACC");
        assert_eq!(result.aligned_query, b"AATTTTTTAATCGGGGGGGG");
        assert_eq!(result.aligned_target, b"----------------AACC");
        assert_eq!(result.score, -16);

        // Trailing gaps free: mirror case with two matches.
        let result = run(true, false, "AATTTTTTAATCGGGGGGGG", "AACC");
        assert_eq!(result.aligned_query, b"AATTTTTTAATCGGGGGGGG");
        assert_eq!(result.aligned_target, b"AACC----------------");
        assert_eq!(result.score, 2);

        // Both free: b slides to the best interior window.
        let result = run(false, false, "TTTTTTAATCGGGGGGGG", "AACC");
        assert_eq!(result.aligned_query, b"TTTTTTAATCGGGGGGGG");
        assert_eq!(result.aligned_target, b"------AACC--------");
        assert_eq!(result.score, 11);
    }

    #[test]
    fn tie_rich_cases_match_the_full_engine_score() {
        // Multiple optima exist; scores must still agree exactly.
        let cases: &[(&str, &str, bool, bool, i32)] = &[
            ("AAAA", "AA", true, true, -10),
            ("AAT", "AC", true, true, -9),
            ("AATTTTTTAATCGGGGGGGG", "AACC", true, true, -149),
        ];
        for &(a, b, start, end, expected) in cases {
            let result = run(start, end, a, b);
            assert_eq!(result.score, expected, "{a}/{b}");
            assert_eq!(strip_gaps(&result.aligned_query), a.as_bytes());
            assert_eq!(strip_gaps(&result.aligned_target), b.as_bytes());
        }
    }

    #[test]
    fn long_sequences_score() {
        let a = "GCGCGTGCGCGGAAGGAGCCAAGGTGAAGTTGTAGCAGTGTGTCAGAAGAGGTGCGTGGC\
                 ACCATGCTGTCCCCCGAGGCGGAGCGGGTGCTGCGGTACCTGGTCGAAGTAGAGGAGTTG";
        let b = "GACTTGTGGAACCTACTTCCTGAAAATAACCTTCTGTCCTCCGAGCTCTCCGCACCCGTG\
                 GATGACCTGCTCCCGTACACAGATGTTGCCACCTGGCTGGATGAATGTCCGAATGAAGCG";
        let result = run(true, true, a, b);
        assert_eq!(result.score, -41);
        assert_eq!(strip_gaps(&result.aligned_query), a.as_bytes());
        assert_eq!(strip_gaps(&result.aligned_target), b.as_bytes());
        assert_eq!(result.aligned_query.len(), result.aligned_target.len());
    }

    #[test]
    fn replayed_score_matches_rescore() {
        let scoring = ScoringScheme::dna();
        let policy = GapPolicy::new(-10, false, true);
        let mut aligner = Hirschberg::new(scoring.clone(), policy);
        let result = aligner.align(b"AATCGATCG", b"ATCGGG").unwrap();
        assert_eq!(result.rescore(&scoring, &policy), result.score);
    }

    #[test]
    fn empty_sequences() {
        let result = run(true, true, "", "");
        assert!(result.is_empty());
        assert_eq!(result.score, 0);

        let result = run(true, true, "ACG", "");
        assert_eq!(result.aligned_query, b"ACG");
        assert_eq!(result.aligned_target, b"---");
        assert_eq!(result.score, -30);
    }

    #[test]
    fn buffers_are_reused_across_calls() {
        let mut aligner =
            Hirschberg::new(ScoringScheme::dna(), GapPolicy::new(-10, true, true));
        let first = aligner.align(b"ACGTACGTACGT", b"ACGT").unwrap();
        let second = aligner.align(b"AC", b"AC").unwrap();
        assert_eq!(second.score, 10);
        assert_eq!(first.aligned_query.len(), first.aligned_target.len());

        let mut fresh = NeedlemanWunsch::new(ScoringScheme::dna(), GapPolicy::new(-10, true, true));
        let reference = fresh.align(b"ACGTACGTACGT", b"ACGT").unwrap();
        assert_eq!(first.score, reference.score);
    }
}
