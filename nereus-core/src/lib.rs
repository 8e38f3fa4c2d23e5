//! Shared primitives for the Nereus pairwise alignment toolkit.
//!
//! `nereus-core` provides the foundation the other Nereus crates build on:
//!
//! - **Error types** — [`NereusError`] and [`Result`] for structured error handling
//! - **Traits** — [`Sequence`] for byte-backed sequence types, [`Scored`] for
//!   results that carry a numeric score

pub mod error;
pub mod traits;

pub use error::{NereusError, Result};
pub use traits::*;
