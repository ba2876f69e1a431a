//! Needleman-Wunsch global alignment with a linear gap model.

use thiserror::Error;
use tracing::debug;

use crate::alignment::matrix::ScoreMatrix;
use crate::alignment::scoring::ScoringScheme;
use crate::core::alignment::Alignment;
use crate::core::sequence::Sequence;
use crate::utils::validation::{matrix_cells, GAP, MAX_MATRIX_CELLS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("Score matrix of {rows} x {cols} cells exceeds maximum of {MAX_MATRIX_CELLS}")]
    MatrixTooLarge { rows: usize, cols: usize },
}

/// Move taken from a cell while backtracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traceback {
    /// Consume one symbol from each sequence
    Diagonal,
    /// Consume a symbol from the first sequence against a gap
    Up,
    /// Consume a symbol from the second sequence against a gap
    Left,
}

/// Global aligner. Holds only its scoring scheme, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeedlemanWunsch {
    scoring: ScoringScheme,
}

impl NeedlemanWunsch {
    #[must_use]
    pub fn new(scoring: ScoringScheme) -> Self {
        Self { scoring }
    }

    #[must_use]
    pub fn scoring(&self) -> &ScoringScheme {
        &self.scoring
    }

    /// Align `a` against `b`, returning one optimal alignment and its score.
    ///
    /// Among co-optimal paths the backtrack prefers diagonal, then up (gap in
    /// `b`), then left (gap in `a`).
    ///
    /// # Errors
    ///
    /// Returns `AlignError::MatrixTooLarge` if the score matrix would exceed
    /// the cell limit. Nothing is allocated in that case.
    pub fn align(&self, a: &Sequence, b: &Sequence) -> Result<Alignment, AlignError> {
        let matrix = self.score_matrix(a, b)?;
        let score = matrix.last();
        let (aligned_a, aligned_b) = self.traceback(&matrix, a.as_bytes(), b.as_bytes());

        Ok(Alignment {
            aligned_a,
            aligned_b,
            score,
        })
    }

    /// Build and fill the `(|a|+1) x (|b|+1)` score matrix
    ///
    /// # Errors
    ///
    /// Returns `AlignError::MatrixTooLarge` if the matrix would exceed the cell limit.
    pub fn score_matrix(&self, a: &Sequence, b: &Sequence) -> Result<ScoreMatrix, AlignError> {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        if matrix_cells(rows, cols).is_none() {
            return Err(AlignError::MatrixTooLarge { rows, cols });
        }

        debug!("Filling {rows} x {cols} score matrix");

        let mut matrix = ScoreMatrix::new(rows, cols);
        self.initialize_matrix(&mut matrix);
        self.fill_matrix(&mut matrix, a.as_bytes(), b.as_bytes());
        Ok(matrix)
    }

    fn initialize_matrix(&self, matrix: &mut ScoreMatrix) {
        for i in 0..matrix.rows() {
            matrix.set(i, 0, self.scoring.gap_run(i));
        }
        for j in 0..matrix.cols() {
            matrix.set(0, j, self.scoring.gap_run(j));
        }
    }

    fn fill_matrix(&self, matrix: &mut ScoreMatrix, a: &[u8], b: &[u8]) {
        let gap = self.scoring.gap_penalty;

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let diagonal =
                    matrix.get(i - 1, j - 1) + self.scoring.pairscore(a[i - 1], b[j - 1]);
                let up = matrix.get(i - 1, j) + gap;
                let left = matrix.get(i, j - 1) + gap;
                matrix.set(i, j, diagonal.max(up).max(left));
            }
        }
    }

    /// Which move produced `matrix[i][j]`, checked in tie-break order
    fn step(&self, matrix: &ScoreMatrix, a: &[u8], b: &[u8], i: usize, j: usize) -> Traceback {
        let current = matrix.get(i, j);

        if i > 0
            && j > 0
            && current == matrix.get(i - 1, j - 1) + self.scoring.pairscore(a[i - 1], b[j - 1])
        {
            Traceback::Diagonal
        } else if i > 0 && current == matrix.get(i - 1, j) + self.scoring.gap_penalty {
            Traceback::Up
        } else {
            Traceback::Left
        }
    }

    fn traceback(&self, matrix: &ScoreMatrix, a: &[u8], b: &[u8]) -> (String, String) {
        let mut aligned_a = Vec::with_capacity(a.len() + b.len());
        let mut aligned_b = Vec::with_capacity(a.len() + b.len());

        let mut i = a.len();
        let mut j = b.len();

        while i > 0 || j > 0 {
            match self.step(matrix, a, b, i, j) {
                Traceback::Diagonal => {
                    aligned_a.push(a[i - 1]);
                    aligned_b.push(b[j - 1]);
                    i -= 1;
                    j -= 1;
                }
                Traceback::Up => {
                    aligned_a.push(a[i - 1]);
                    aligned_b.push(GAP);
                    i -= 1;
                }
                Traceback::Left => {
                    aligned_a.push(GAP);
                    aligned_b.push(b[j - 1]);
                    j -= 1;
                }
            }
        }

        aligned_a.reverse();
        aligned_b.reverse();

        // Sequences are validated ASCII and GAP is ASCII
        (
            String::from_utf8_lossy(&aligned_a).into_owned(),
            String::from_utf8_lossy(&aligned_b).into_owned(),
        )
    }
}
