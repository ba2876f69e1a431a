use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::sequence::Sequence;
use crate::utils::validation::MAX_SCORE_MAGNITUDE;

/// Default reward for aligning two identical symbols
pub const DEFAULT_MATCH_REWARD: i32 = 1;

/// Default penalty for aligning two different symbols
pub const DEFAULT_MISMATCH_PENALTY: i32 = -1;

/// Default penalty for each gap position
pub const DEFAULT_GAP_PENALTY: i32 = -2;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Failed to read scoring file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse scoring file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scoring scheme: {0}")]
    Invalid(String),
}

/// Match/mismatch/gap constants for a linear gap model.
///
/// Penalties are expressed as the (usually negative) value added to the score,
/// so a gap costs `gap_penalty` per position regardless of run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringScheme {
    pub match_reward: i32,
    pub mismatch_penalty: i32,
    pub gap_penalty: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_reward: DEFAULT_MATCH_REWARD,
            mismatch_penalty: DEFAULT_MISMATCH_PENALTY,
            gap_penalty: DEFAULT_GAP_PENALTY,
        }
    }
}

impl ScoringScheme {
    /// Build and validate a scheme
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::Invalid` if the constants are out of range or
    /// inconsistent (see [`ScoringScheme::validate`]).
    pub fn new(
        match_reward: i32,
        mismatch_penalty: i32,
        gap_penalty: i32,
    ) -> Result<Self, ScoringError> {
        let scheme = Self {
            match_reward,
            mismatch_penalty,
            gap_penalty,
        };
        scheme.validate()?;
        Ok(scheme)
    }

    /// Load a scheme from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::Read` if the file cannot be read,
    /// `ScoringError::Parse` for malformed JSON, or `ScoringError::Invalid`
    /// if the values fail validation.
    pub fn load_from_file(path: &Path) -> Result<Self, ScoringError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a scheme from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::Parse` for malformed JSON or
    /// `ScoringError::Invalid` if the values fail validation.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let scheme: Self = serde_json::from_str(json)?;
        scheme.validate()?;
        Ok(scheme)
    }

    /// Check that every constant is within `±MAX_SCORE_MAGNITUDE`, that a
    /// match scores strictly higher than a mismatch, and that gaps are not
    /// rewarded.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::Invalid` describing the first violated rule.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for (name, value) in [
            ("match_reward", self.match_reward),
            ("mismatch_penalty", self.mismatch_penalty),
            ("gap_penalty", self.gap_penalty),
        ] {
            if !(-MAX_SCORE_MAGNITUDE..=MAX_SCORE_MAGNITUDE).contains(&value) {
                return Err(ScoringError::Invalid(format!(
                    "{name} {value} exceeds maximum magnitude {MAX_SCORE_MAGNITUDE}"
                )));
            }
        }

        if self.match_reward <= self.mismatch_penalty {
            return Err(ScoringError::Invalid(format!(
                "match_reward ({}) must be greater than mismatch_penalty ({})",
                self.match_reward, self.mismatch_penalty
            )));
        }

        if self.gap_penalty > 0 {
            return Err(ScoringError::Invalid(format!(
                "gap_penalty ({}) must not be positive",
                self.gap_penalty
            )));
        }

        Ok(())
    }

    /// Score for aligning symbol `x` against symbol `y`
    #[inline]
    #[must_use]
    pub fn pairscore(&self, x: u8, y: u8) -> i32 {
        if x == y {
            self.match_reward
        } else {
            self.mismatch_penalty
        }
    }

    /// Cumulative penalty for `count` consecutive gap positions
    #[inline]
    #[must_use]
    pub fn gap_run(&self, count: usize) -> i32 {
        // count is bounded by MAX_SEQUENCE_LENGTH, well within i32
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let count = count as i32;
        count * self.gap_penalty
    }
}

/// Materialized `m x n` table of pair scores between two sequences.
///
/// The aligner computes pair scores on demand; this table exists for
/// inspection and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairScoreTable {
    scores: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl PairScoreTable {
    #[must_use]
    pub fn new(a: &Sequence, b: &Sequence, scheme: &ScoringScheme) -> Self {
        let scores = a
            .as_bytes()
            .iter()
            .flat_map(|&x| b.as_bytes().iter().map(move |&y| scheme.pairscore(x, y)))
            .collect();

        Self {
            scores,
            rows: a.len(),
            cols: b.len(),
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

    /// Score for `a[row]` against `b[col]`
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(row < self.rows && col < self.cols, "index out of range");
        self.scores[row * self.cols + col]
    }
}
