//! Core data types for pairwise alignment.
//!
//! - [`Sequence`]: a validated, immutable sequence of symbols
//! - [`Alignment`]: one optimal alignment plus its score
//! - [`AlignmentStats`]: match, mismatch and gap counts for an alignment
//!
//! ## Symbols
//!
//! Sequences may contain any printable, non-whitespace ASCII character except
//! `-`, which is reserved for gaps in aligned output. Comparison is exact and
//! case-sensitive: `a` and `A` are different symbols.

pub mod alignment;
pub mod sequence;

pub use alignment::{Alignment, AlignmentStats};
pub use sequence::{Sequence, SequenceError};
