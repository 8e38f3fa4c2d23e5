//! FASTA input for the Nereus alignment toolkit.
//!
//! Pairwise alignment needs exactly two sequences. This crate loads them
//! from one FASTA file (first two records) or two FASTA files (first record
//! of each) and hands the engine plain byte sequences with their header
//! descriptions.

pub mod fasta;

pub use fasta::{load_pair, read_first_n, Record};
