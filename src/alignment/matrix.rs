/// Dense `(rows) x (cols)` grid of scores stored row-major in one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Zero-filled matrix. Callers bound `rows * cols` beforehand.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    /// Value of the bottom-right cell
    ///
    /// # Panics
    ///
    /// Panics if the matrix has no cells.
    #[must_use]
    pub fn last(&self) -> i32 {
        self.get(self.rows - 1, self.cols - 1)
    }
}
