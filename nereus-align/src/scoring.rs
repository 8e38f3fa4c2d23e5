//! Scoring schemes and alphabet validation for pairwise alignment.
//!
//! Provides a nucleotide substitution matrix ([`MatrixScorer::dna`]), the
//! BLOSUM62 protein matrix ([`MatrixScorer::blosum62`]), a match/mismatch
//! fallback for arbitrary symbols ([`UniformScorer`]), and the unified
//! [`ScoringScheme`] enum the alignment engines accept.
//!
//! Gap penalties are *not* part of a scheme here; they live in
//! [`GapPolicy`](crate::gap::GapPolicy), which the engines take separately.

use nereus_core::{NereusError, Result};

use crate::types::GAP;

// ---------------------------------------------------------------------------
// Matrix scoring (fixed alphabet)
// ---------------------------------------------------------------------------

/// A square substitution matrix over a fixed alphabet.
///
/// Stores a flattened row-major score table plus a 256-entry symbol-to-index
/// map. Symbols outside the alphabet have no defined score; callers are
/// expected to [`find_invalid`](Self::find_invalid) before scoring.
#[derive(Debug, Clone)]
pub struct MatrixScorer {
    /// `dim * dim` flattened score table (row-major).
    scores: Vec<i32>,
    /// Symbol byte → matrix index, `-1` for symbols outside the alphabet.
    index: Vec<i16>,
    dim: usize,
    name: &'static str,
}

impl MatrixScorer {
    fn from_table(name: &'static str, alphabet: &[u8], scores: Vec<i32>) -> Self {
        let dim = alphabet.len();
        debug_assert_eq!(scores.len(), dim * dim);
        let mut index = vec![-1i16; 256];
        for (i, &sym) in alphabet.iter().enumerate() {
            index[sym as usize] = i as i16;
        }
        Self {
            scores,
            index,
            dim,
            name,
        }
    }

    /// Nucleotide matrix over the `ATGC` alphabet: +5 match, -4 mismatch.
    pub fn dna() -> Self {
        #[rustfmt::skip]
        let scores = vec![
             5, -4, -4, -4,
            -4,  5, -4, -4,
            -4, -4,  5, -4,
            -4, -4, -4,  5,
        ];
        Self::from_table("DNA", b"ATGC", scores)
    }

    /// BLOSUM62 matrix over the 20 standard amino acids.
    pub fn blosum62() -> Self {
        #[rustfmt::skip]
        let scores = vec![
            // A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V
             4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0,
            -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3,
            -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,
            -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,
             0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1,
            -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,
            -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,
             0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3,
            -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,
            -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3,
            -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1,
            -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,
            -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1,
            -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1,
            -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2,
             1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,
             0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0,
            -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3,
            -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1,
             0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4,
        ];
        Self::from_table("BLOSUM62", b"ARNDCQEGHILKMFPSTWYV", scores)
    }

    /// Matrix name (e.g. `"BLOSUM62"`).
    pub fn name(&self) -> &str {
        self.name
    }

    /// Score a pair of symbols by table lookup.
    ///
    /// # Panics
    ///
    /// Panics if either symbol is outside the alphabet; run
    /// [`find_invalid`](Self::find_invalid) first.
    pub fn score_pair(&self, a: u8, b: u8) -> i32 {
        let ia = self.index[a as usize] as usize;
        let ib = self.index[b as usize] as usize;
        self.scores[ia * self.dim + ib]
    }

    /// First symbol outside the alphabet, as `(position, symbol)`.
    pub fn find_invalid(&self, seq: &[u8]) -> Option<(usize, u8)> {
        seq.iter()
            .position(|&b| self.index[b as usize] < 0)
            .map(|pos| (pos, seq[pos]))
    }
}

// ---------------------------------------------------------------------------
// Uniform scoring (arbitrary symbols)
// ---------------------------------------------------------------------------

/// Match/mismatch scoring over arbitrary symbols.
///
/// Any byte except the reserved gap marker `-` is part of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformScorer {
    pub match_score: i32,
    pub mismatch_score: i32,
}

impl Default for UniformScorer {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
        }
    }
}

impl UniformScorer {
    /// Score a pair of symbols.
    pub fn score_pair(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// First occurrence of the reserved gap marker, as `(position, symbol)`.
    pub fn find_invalid(&self, seq: &[u8]) -> Option<(usize, u8)> {
        seq.iter().position(|&b| b == GAP).map(|pos| (pos, GAP))
    }
}

// ---------------------------------------------------------------------------
// Unified scheme
// ---------------------------------------------------------------------------

/// A scoring scheme the alignment engines accept.
#[derive(Debug, Clone)]
pub enum ScoringScheme {
    /// Substitution matrix over a fixed alphabet (DNA, BLOSUM62, custom).
    Matrix(MatrixScorer),
    /// Match/mismatch over arbitrary symbols.
    Uniform(UniformScorer),
}

impl ScoringScheme {
    /// Nucleotide scheme: `ATGC`, +5 match, -4 mismatch.
    pub fn dna() -> Self {
        ScoringScheme::Matrix(MatrixScorer::dna())
    }

    /// Protein scheme: BLOSUM62 over the 20 standard amino acids.
    pub fn blosum62() -> Self {
        ScoringScheme::Matrix(MatrixScorer::blosum62())
    }

    /// Default scheme: +1 match, -1 mismatch, any symbol except `-`.
    pub fn uniform() -> Self {
        ScoringScheme::Uniform(UniformScorer::default())
    }

    /// Score a pair of symbols.
    pub fn score_pair(&self, a: u8, b: u8) -> i32 {
        match self {
            ScoringScheme::Matrix(m) => m.score_pair(a, b),
            ScoringScheme::Uniform(u) => u.score_pair(a, b),
        }
    }

    /// First symbol outside the scheme's alphabet, as `(position, symbol)`.
    pub fn find_invalid(&self, seq: &[u8]) -> Option<(usize, u8)> {
        match self {
            ScoringScheme::Matrix(m) => m.find_invalid(seq),
            ScoringScheme::Uniform(u) => u.find_invalid(seq),
        }
    }
}

/// Validate sequences against a scheme, in order, failing fast.
///
/// # Errors
///
/// Returns [`NereusError::InvalidSymbol`] carrying the 0-based ordinal of the
/// first offending sequence. Symbols are never substituted or dropped.
pub fn validate(scheme: &ScoringScheme, seqs: &[&[u8]]) -> Result<()> {
    for (ordinal, seq) in seqs.iter().enumerate() {
        if let Some((position, symbol)) = scheme.find_invalid(seq) {
            return Err(NereusError::InvalidSymbol {
                sequence: ordinal,
                position,
                symbol: symbol as char,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_match_and_mismatch() {
        let m = MatrixScorer::dna();
        assert_eq!(m.score_pair(b'A', b'A'), 5);
        assert_eq!(m.score_pair(b'C', b'C'), 5);
        assert_eq!(m.score_pair(b'A', b'G'), -4);
        assert_eq!(m.score_pair(b'T', b'C'), -4);
    }

    #[test]
    fn dna_alphabet_is_case_sensitive() {
        let m = MatrixScorer::dna();
        assert_eq!(m.find_invalid(b"ATGC"), None);
        assert_eq!(m.find_invalid(b"ATgC"), Some((2, b'g')));
        assert_eq!(m.find_invalid(b"ATNC"), Some((2, b'N')));
        assert_eq!(m.find_invalid(b"AT-C"), Some((2, b'-')));
    }

    #[test]
    fn blosum62_spot_values() {
        let m = MatrixScorer::blosum62();
        assert_eq!(m.name(), "BLOSUM62");
        assert_eq!(m.score_pair(b'A', b'A'), 4);
        assert_eq!(m.score_pair(b'W', b'W'), 11);
        assert_eq!(m.score_pair(b'W', b'C'), -2);
        assert_eq!(m.score_pair(b'E', b'D'), 2);
    }

    #[test]
    fn blosum62_is_symmetric() {
        let m = MatrixScorer::blosum62();
        for &a in b"ARNDCQEGHILKMFPSTWYV" {
            for &b in b"ARNDCQEGHILKMFPSTWYV" {
                assert_eq!(m.score_pair(a, b), m.score_pair(b, a));
            }
        }
    }

    #[test]
    fn blosum62_rejects_ambiguity_codes() {
        let m = MatrixScorer::blosum62();
        assert_eq!(m.find_invalid(b"HEAGAWGHEE"), None);
        assert_eq!(m.find_invalid(b"HEB"), Some((2, b'B')));
        assert_eq!(m.find_invalid(b"X"), Some((0, b'X')));
    }

    #[test]
    fn uniform_accepts_anything_but_gap() {
        let u = UniformScorer::default();
        assert_eq!(u.score_pair(b'x', b'x'), 1);
        assert_eq!(u.score_pair(b'x', b'y'), -1);
        assert_eq!(u.find_invalid(b"hello world!"), None);
        assert_eq!(u.find_invalid(b"a-b"), Some((1, b'-')));
    }

    #[test]
    fn validate_reports_sequence_ordinal() {
        let scheme = ScoringScheme::dna();
        let err = validate(&scheme, &[b"ATGC", b"AXGC"]).unwrap_err();
        match err {
            NereusError::InvalidSymbol {
                sequence,
                position,
                symbol,
            } => {
                assert_eq!(sequence, 1);
                assert_eq!(position, 1);
                assert_eq!(symbol, 'X');
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_accepts_valid_pair() {
        let scheme = ScoringScheme::dna();
        assert!(validate(&scheme, &[b"ATGC", b"GGCC"]).is_ok());
    }
}
