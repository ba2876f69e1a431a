use serde::Serialize;

use crate::utils::validation::GAP;

/// One optimal global alignment of two sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    /// First sequence with gaps inserted
    pub aligned_a: String,

    /// Second sequence with gaps inserted, same length as `aligned_a`
    pub aligned_b: String,

    /// Optimal score, the bottom-right cell of the score matrix
    pub score: i32,
}

/// Column counts for an alignment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignmentStats {
    pub length: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,

    /// Fraction of columns that are matches (0.0 for an empty alignment)
    pub identity: f64,
}

impl Alignment {
    /// Both aligned strings joined by a single space, as written to the
    /// `alignment text` column.
    #[must_use]
    pub fn alignment_text(&self) -> String {
        format!("{} {}", self.aligned_a, self.aligned_b)
    }

    /// Number of alignment columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned_a.bytes().zip(self.aligned_b.bytes())
    }

    /// Per-column markers: `|` for a match, `X` for a mismatch, ` ` for a gap
    #[must_use]
    pub fn midline(&self) -> String {
        self.columns()
            .map(|(a, b)| {
                if a == GAP || b == GAP {
                    ' '
                } else if a == b {
                    '|'
                } else {
                    'X'
                }
            })
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> AlignmentStats {
        let mut matches = 0;
        let mut mismatches = 0;
        let mut gaps = 0;

        for (a, b) in self.columns() {
            if a == GAP || b == GAP {
                gaps += 1;
            } else if a == b {
                matches += 1;
            } else {
                mismatches += 1;
            }
        }

        let length = self.len();
        #[allow(clippy::cast_precision_loss)]
        let identity = if length == 0 {
            0.0
        } else {
            matches as f64 / length as f64
        };

        AlignmentStats {
            length,
            matches,
            mismatches,
            gaps,
            identity,
        }
    }
}
