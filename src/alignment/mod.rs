//! Global pairwise alignment.
//!
//! - [`ScoringScheme`]: match reward, mismatch penalty and linear gap penalty
//! - [`NeedlemanWunsch`]: fills the score matrix and backtracks one optimal path
//! - [`PairScoreTable`]: optional materialization of every pair score
//!
//! ## Algorithm
//!
//! For sequences `A` (length `m`) and `B` (length `n`) an `(m+1) x (n+1)` matrix
//! is filled row-major:
//!
//! ```text
//! M[i][0] = i * gap        M[0][j] = j * gap
//! M[i][j] = max(M[i-1][j-1] + pairscore(A[i-1], B[j-1]),
//!               M[i-1][j]   + gap,
//!               M[i][j-1]   + gap)
//! ```
//!
//! The score is `M[m][n]`. Backtracking starts there and, at each cell, takes
//! the first move that reproduces the cell value in the order diagonal, up,
//! left. This order fixes which of several co-optimal alignments is returned.
//!
//! ## Example
//!
//! ```
//! use nw_align::{NeedlemanWunsch, ScoringScheme, Sequence};
//!
//! let aligner = NeedlemanWunsch::new(ScoringScheme::default());
//! let a = Sequence::new("ATCGT").unwrap();
//! let b = Sequence::new("ACGT").unwrap();
//!
//! let alignment = aligner.align(&a, &b).unwrap();
//! assert_eq!(alignment.alignment_text(), "ATCGT A-CGT");
//! assert_eq!(alignment.score, 2);
//! ```

pub mod aligner;
pub mod matrix;
pub mod scoring;

pub use aligner::{AlignError, NeedlemanWunsch};
pub use matrix::ScoreMatrix;
pub use scoring::{PairScoreTable, ScoringError, ScoringScheme};
