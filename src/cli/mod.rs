//! Command-line interface for nw-align.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **table**: Align every sequence pair in a CSV/TSV table and write the
//!   table back out with `alignment text` and `alignment score` columns
//! - **pair**: Align two sequences given on the command line
//!
//! ## Usage
//!
//! ```text
//! # Align every row of a table, writing results.csv
//! nw-align table input.csv
//!
//! # Custom output and scoring
//! nw-align table pairs.tsv.gz -o aligned.tsv --gap-penalty -3
//!
//! # Align a single pair as JSON
//! nw-align pair GATTACA GCATGCU --format json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::alignment::scoring::ScoringScheme;

pub mod pair;
pub mod table;

#[derive(Parser)]
#[command(name = "nw-align")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Global pairwise sequence alignment with Needleman-Wunsch")]
#[command(
    long_about = "nw-align computes an optimal global alignment between pairs of sequences.\n\nScoring uses a match reward, a mismatch penalty and a linear gap penalty. When several alignments share the optimal score, the one preferring matches/mismatches, then gaps in the second sequence, then gaps in the first sequence is reported."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align every sequence pair in a CSV/TSV table
    Table(table::TableArgs),

    /// Align two sequences given on the command line
    Pair(pair::PairArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Scoring options shared by all commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ScoringArgs {
    /// JSON file with `match_reward`, `mismatch_penalty` and `gap_penalty`.
    /// Explicit flags override values from the file.
    #[arg(long, value_name = "FILE")]
    pub scoring: Option<PathBuf>,

    /// Score added for identical symbols [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    pub match_reward: Option<i32>,

    /// Score added for different symbols [default: -1]
    #[arg(long, allow_negative_numbers = true)]
    pub mismatch_penalty: Option<i32>,

    /// Score added for each gap position [default: -2]
    #[arg(long, allow_negative_numbers = true)]
    pub gap_penalty: Option<i32>,
}

impl ScoringArgs {
    /// Build the scoring scheme from the optional file and flag overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the scoring file cannot be loaded or the resulting
    /// scheme is invalid.
    pub fn resolve(&self) -> anyhow::Result<ScoringScheme> {
        let base = match &self.scoring {
            Some(path) => ScoringScheme::load_from_file(path)
                .with_context(|| format!("Failed to load scoring file {}", path.display()))?,
            None => ScoringScheme::default(),
        };

        let scheme = ScoringScheme::new(
            self.match_reward.unwrap_or(base.match_reward),
            self.mismatch_penalty.unwrap_or(base.mismatch_penalty),
            self.gap_penalty.unwrap_or(base.gap_penalty),
        )?;

        tracing::debug!(
            "Scoring: match {}, mismatch {}, gap {}",
            scheme.match_reward,
            scheme.mismatch_penalty,
            scheme.gap_penalty
        );

        Ok(scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let scheme = ScoringArgs::default().resolve().unwrap();
        assert_eq!(scheme, ScoringScheme::default());
    }

    #[test]
    fn test_resolve_overrides_file() {
        let temp = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        std::fs::write(
            temp.path(),
            r#"{"match_reward": 3, "mismatch_penalty": -2, "gap_penalty": -4}"#,
        )
        .unwrap();

        let args = ScoringArgs {
            scoring: Some(temp.path().to_path_buf()),
            gap_penalty: Some(-1),
            ..ScoringArgs::default()
        };
        let scheme = args.resolve().unwrap();
        assert_eq!(scheme, ScoringScheme::new(3, -2, -1).unwrap());
    }

    #[test]
    fn test_resolve_rejects_invalid() {
        let args = ScoringArgs {
            gap_penalty: Some(5),
            ..ScoringArgs::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_parse_negative_flags() {
        let cli = Cli::try_parse_from([
            "nw-align",
            "pair",
            "ACGT",
            "AGT",
            "--gap-penalty",
            "-3",
            "--mismatch-penalty",
            "-2",
        ])
        .unwrap();

        match cli.command {
            Commands::Pair(args) => {
                assert_eq!(args.scoring.gap_penalty, Some(-3));
                assert_eq!(args.scoring.mismatch_penalty, Some(-2));
            }
            Commands::Table(_) => panic!("Expected pair command"),
        }
    }
}
