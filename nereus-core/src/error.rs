//! Structured error types for the Nereus toolkit.

use thiserror::Error;

/// Unified error type for all Nereus operations.
#[derive(Debug, Error)]
pub enum NereusError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed FASTA input)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, wrong number of sequences)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A sequence contains a symbol outside the configured alphabet.
    ///
    /// `sequence` is the 0-based ordinal of the offending input sequence.
    #[error("sequence {sequence}: invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        sequence: usize,
        position: usize,
        symbol: char,
    },

    /// An output writer received alignment strings of unequal length.
    ///
    /// A correct engine never produces these, so this signals an invariant
    /// violation rather than a normal error path.
    #[error("aligned write: sequences are not aligned")]
    NotAligned,

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the Nereus crates.
pub type Result<T> = std::result::Result<T, NereusError>;
