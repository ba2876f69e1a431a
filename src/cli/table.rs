//! Table command - align every sequence pair in a delimited table.
//!
//! All rows are validated and aligned before anything is written, and the
//! output is replaced atomically, so a malformed row never leaves a partial
//! results table behind.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::{debug, info};

use crate::alignment::aligner::NeedlemanWunsch;
use crate::alignment::scoring::ScoringScheme;
use crate::cli::{OutputFormat, ScoringArgs};
use crate::core::alignment::Alignment;
use crate::parsing::table::{self, SequenceTable};

/// Field delimiter override
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }
}

/// Arguments for the table command
#[derive(Args)]
pub struct TableArgs {
    /// Input table (CSV or TSV, optionally gzipped) with a header row;
    /// the first two columns hold the sequences to align
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output table path
    #[arg(short, long, default_value = "results.csv")]
    pub output: PathBuf,

    /// Field delimiter for input and output [default: from input extension]
    #[arg(long)]
    pub delimiter: Option<Delimiter>,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

/// Summary of a table run
struct TableSummary<'a> {
    input: &'a Path,
    output: &'a Path,
    rows: usize,
    total_score: i64,
    scheme: ScoringScheme,
}

/// Execute the table command
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, any row holds an
/// invalid sequence, or the output cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: TableArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let scheme = args.scoring.resolve()?;

    let table = table::parse_table_file(&args.input, args.delimiter.map(Delimiter::as_byte))
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Input: {} rows, {} columns",
            table.rows.len(),
            table.header.len()
        );
    }

    let alignments = align_rows(&table, &scheme)?;

    table::write_results_file(&args.output, &table, &alignments)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let summary = TableSummary {
        input: &args.input,
        output: &args.output,
        rows: alignments.len(),
        total_score: alignments.iter().map(|a| i64::from(a.score)).sum(),
        scheme,
    };

    info!(
        "Aligned {} rows from {} into {}",
        summary.rows,
        summary.input.display(),
        summary.output.display()
    );

    match format {
        OutputFormat::Text => print_text_summary(&summary),
        OutputFormat::Json => print_json_summary(&summary)?,
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

/// Align every row, stopping at the first invalid one
///
/// # Errors
///
/// Returns an error naming the line of the first row that fails validation or
/// alignment.
pub fn align_rows(
    table: &SequenceTable,
    scheme: &ScoringScheme,
) -> anyhow::Result<Vec<Alignment>> {
    let aligner = NeedlemanWunsch::new(*scheme);

    table
        .rows
        .iter()
        .map(|row| {
            let (a, b) = row.sequences()?;
            let alignment = aligner
                .align(&a, &b)
                .with_context(|| format!("Failed to align line {}", row.line))?;
            debug!(
                "Line {}: {} (score {})",
                row.line,
                alignment.alignment_text(),
                alignment.score
            );
            Ok(alignment)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn mean_score(summary: &TableSummary<'_>) -> Option<f64> {
    (summary.rows > 0).then(|| summary.total_score as f64 / summary.rows as f64)
}

fn print_text_summary(summary: &TableSummary<'_>) {
    println!("Alignment Summary");
    println!("{}", "=".repeat(60));
    println!("\nInput: {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    println!("Rows aligned: {}", summary.rows);
    if let Some(mean) = mean_score(summary) {
        println!("Mean score: {mean:.2}");
    }
    println!(
        "Scoring: match {}, mismatch {}, gap {}",
        summary.scheme.match_reward, summary.scheme.mismatch_penalty, summary.scheme.gap_penalty
    );
}

fn print_json_summary(summary: &TableSummary<'_>) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": summary.input.display().to_string(),
        "output": summary.output.display().to_string(),
        "rows": summary.rows,
        "mean_score": mean_score(summary),
        "scoring": summary.scheme,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(summary: &TableSummary<'_>) {
    println!("input\toutput\trows\tmean_score");
    println!(
        "{}\t{}\t{}\t{}",
        summary.input.display(),
        summary.output.display(),
        summary.rows,
        mean_score(summary).map_or_else(String::new, |m| format!("{m:.4}")),
    );
}
