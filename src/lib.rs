//! # nw-align
//!
//! A library for optimal global alignment of two symbol sequences using the
//! Needleman-Wunsch dynamic programming algorithm.
//!
//! Alignments are scored with a match reward, a mismatch penalty and a linear
//! gap penalty. When several alignments share the optimal score, the one found
//! by backtracking with the preference diagonal, then up, then left is
//! returned, so results are reproducible across runs and implementations.
//!
//! ## Features
//!
//! - **Exact global alignment**: full `(m+1) x (n+1)` score matrix and backtrack
//! - **Deterministic tie-breaking**: stable golden outputs
//! - **Validated input**: precise errors for symbols that cannot be aligned
//! - **Tabular batch mode**: align every row of a CSV/TSV table (gzip supported)
//!
//! ## Example
//!
//! ```rust
//! use nw_align::{NeedlemanWunsch, ScoringScheme, Sequence};
//!
//! let aligner = NeedlemanWunsch::new(ScoringScheme::default());
//! let a = Sequence::new("GATTACA").unwrap();
//! let b = Sequence::new("GCATGCU").unwrap();
//!
//! let alignment = aligner.align(&a, &b).unwrap();
//! println!("{} (score {})", alignment.alignment_text(), alignment.score);
//! ```
//!
//! ## Modules
//!
//! - [`alignment`]: Scoring scheme, score matrix and the aligner
//! - [`core`]: Sequences and alignment results
//! - [`parsing`]: Reading and writing tables of sequence pairs
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Validation helpers and resource limits

pub mod alignment;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::alignment::aligner::{AlignError, NeedlemanWunsch};
pub use crate::alignment::scoring::{ScoringError, ScoringScheme};
pub use crate::core::alignment::{Alignment, AlignmentStats};
pub use crate::core::sequence::{Sequence, SequenceError};
