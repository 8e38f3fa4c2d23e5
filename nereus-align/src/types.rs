//! Core types for pairwise alignment results.

use core::fmt;

use nereus_core::Result;

use crate::gap::GapPolicy;
use crate::scoring::ScoringScheme;

/// Byte used to mark a gap in an aligned sequence.
pub const GAP: u8 = b'-';

/// One traceback step: which symbols a DP cell consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Consume one symbol from each sequence.
    Match,
    /// Consume one symbol from the target opposite a gap in the query.
    GapInFirst,
    /// Consume one symbol from the query opposite a gap in the target.
    GapInSecond,
    /// Terminate traceback early (local mode only).
    Stop,
}

/// The result of a pairwise sequence alignment.
///
/// Both aligned strings have the same length; stripping [`GAP`] markers from
/// `aligned_query` reproduces the query exactly (ditto `aligned_target`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Aligned query sequence (with `-` for gaps).
    pub aligned_query: Vec<u8>,
    /// Aligned target sequence (with `-` for gaps).
    pub aligned_target: Vec<u8>,
    /// Alignment score.
    pub score: i32,
}

impl Alignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_query.len()
    }

    /// Whether the alignment has no columns.
    pub fn is_empty(&self) -> bool {
        self.aligned_query.is_empty()
    }

    /// Number of columns where query and target carry the same symbol.
    pub fn matches(&self) -> usize {
        self.aligned_query
            .iter()
            .zip(&self.aligned_target)
            .filter(|(a, b)| a == b && **a != GAP)
            .count()
    }

    /// Number of gap columns (in either sequence).
    pub fn gaps(&self) -> usize {
        self.aligned_query
            .iter()
            .zip(&self.aligned_target)
            .filter(|(a, b)| **a == GAP || **b == GAP)
            .count()
    }

    /// Fraction of columns that are exact matches, in `[0.0, 1.0]`.
    ///
    /// Returns 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.matches() as f64 / self.len() as f64
    }

    /// Recompute the score column-by-column under the simple gap model.
    ///
    /// Sums substitution scores for symbol columns and boundary-aware gap
    /// penalties for gap columns. For an alignment produced by a simple-gap
    /// engine this reproduces `self.score` exactly.
    pub fn rescore(&self, scoring: &ScoringScheme, policy: &GapPolicy) -> i32 {
        let m = self.aligned_query.iter().filter(|&&b| b != GAP).count();
        let n = self.aligned_target.iter().filter(|&&b| b != GAP).count();

        let (mut i, mut j) = (0usize, 0usize);
        let mut score = 0i32;
        for (&a, &b) in self.aligned_query.iter().zip(&self.aligned_target) {
            if a == GAP {
                score += policy.at(i, m);
                j += 1;
            } else if b == GAP {
                score += policy.at(j, n);
                i += 1;
            } else {
                score += scoring.score_pair(a, b);
                i += 1;
                j += 1;
            }
        }
        score
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", String::from_utf8_lossy(&self.aligned_query))?;
        writeln!(f, "{}", String::from_utf8_lossy(&self.aligned_target))?;
        write!(f, "score: {}", self.score)
    }
}

impl nereus_core::Scored for Alignment {
    fn score(&self) -> f64 {
        self.score as f64
    }
}

/// A pairwise alignment engine.
///
/// Takes `&mut self` because the linear-space engine reuses scratch buffers
/// between calls; the matrix engines do not retain any state.
pub trait PairwiseAligner {
    /// Align `query` against `target`, returning one optimal alignment.
    ///
    /// # Errors
    ///
    /// Returns [`nereus_core::NereusError::InvalidSymbol`] if either sequence
    /// contains a symbol outside the scoring scheme's alphabet.
    fn align(&mut self, query: &[u8], target: &[u8]) -> Result<Alignment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aln(q: &[u8], t: &[u8], score: i32) -> Alignment {
        Alignment {
            aligned_query: q.to_vec(),
            aligned_target: t.to_vec(),
            score,
        }
    }

    #[test]
    fn match_and_gap_counts() {
        let a = aln(b"AC-GT", b"ACCG-", 3);
        assert_eq!(a.len(), 5);
        assert_eq!(a.matches(), 3);
        assert_eq!(a.gaps(), 2);
    }

    #[test]
    fn identity_perfect_match() {
        let a = aln(b"ACGT", b"ACGT", 8);
        assert!((a.identity() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn identity_empty_alignment() {
        let a = aln(b"", b"", 0);
        assert!((a.identity() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rescore_counts_boundary_gaps() {
        // AT- / --G with free end gaps on both sides: everything is free.
        let a = aln(b"AT-", b"--G", 0);
        let scoring = ScoringScheme::dna();
        let free = GapPolicy::new(-10, false, false);
        assert_eq!(a.rescore(&scoring, &free), 0);

        // Charging both boundaries prices every gap column.
        let charged = GapPolicy::new(-10, true, true);
        assert_eq!(a.rescore(&scoring, &charged), -30);
    }

    #[test]
    fn scored_trait() {
        use nereus_core::Scored;
        let a = aln(b"A", b"A", 5);
        assert!((a.score() - 5.0).abs() < f64::EPSILON);
    }
}
