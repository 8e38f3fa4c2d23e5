//! Pairwise sequence alignment engines for the Nereus toolkit.
//!
//! Three interchangeable dynamic-programming aligners that trade time,
//! space, and gap-penalty expressiveness:
//!
//! - [`NeedlemanWunsch`] — full-matrix global (or local) alignment with a
//!   simple gap penalty; quadratic time and space.
//! - [`Gotoh`] — affine gaps (open/extend) via a three-state automaton;
//!   quadratic time and space.
//! - [`Hirschberg`] — divide-and-conquer global alignment in linear space;
//!   quadratic time, identical scores to [`NeedlemanWunsch`] in global mode.
//!
//! All three share the boundary-aware [`GapPolicy`] (free start/end gaps for
//! semi-global alignment) and the [`ScoringScheme`] substitution strategies.
//!
//! # Quick start
//!
//! ```
//! use nereus_align::{GapPolicy, NeedlemanWunsch, PairwiseAligner, ScoringScheme};
//!
//! let mut aligner = NeedlemanWunsch::new(ScoringScheme::dna(), GapPolicy::new(-10, true, true));
//! let result = aligner.align(b"AATCG", b"AACG").unwrap();
//! assert_eq!(result.score, 10);
//! assert_eq!(result.aligned_target, b"AA-CG");
//! ```

pub mod gap;
pub mod gotoh;
pub mod hirschberg;
pub mod needleman_wunsch;
pub mod scoring;
pub mod types;

pub use gap::{best_of_three, GapPolicy};
pub use gotoh::Gotoh;
pub use hirschberg::Hirschberg;
pub use needleman_wunsch::NeedlemanWunsch;
pub use scoring::{validate, MatrixScorer, ScoringScheme, UniformScorer};
pub use types::{Action, Alignment, PairwiseAligner, GAP};
