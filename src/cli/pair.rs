//! Pair command - align two sequences given on the command line.

use anyhow::Context;
use clap::Args;

use crate::alignment::aligner::NeedlemanWunsch;
use crate::alignment::scoring::ScoringScheme;
use crate::cli::{OutputFormat, ScoringArgs};
use crate::core::alignment::Alignment;
use crate::core::sequence::Sequence;

/// Arguments for the pair command
#[derive(Args)]
pub struct PairArgs {
    /// First sequence (may be empty: "")
    pub sequence_a: String,

    /// Second sequence (may be empty: "")
    pub sequence_b: String,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

/// Execute the pair command
///
/// # Errors
///
/// Returns an error if either sequence is invalid, the scoring options are
/// invalid, or the alignment exceeds resource limits.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: PairArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let scheme = args.scoring.resolve()?;

    let a = Sequence::new(&args.sequence_a).context("Invalid first sequence")?;
    let b = Sequence::new(&args.sequence_b).context("Invalid second sequence")?;

    if verbose {
        eprintln!("Aligning {} x {} symbols", a.len(), b.len());
    }

    let alignment = NeedlemanWunsch::new(scheme).align(&a, &b)?;

    match format {
        OutputFormat::Text => print_text_alignment(&alignment),
        OutputFormat::Json => print_json_alignment(&a, &b, &scheme, &alignment)?,
        OutputFormat::Tsv => print_tsv_alignment(&alignment),
    }

    Ok(())
}

fn print_text_alignment(alignment: &Alignment) {
    let stats = alignment.stats();

    println!("Alignment");
    println!("{}", "=".repeat(60));
    println!("\nA: {}", alignment.aligned_a);
    println!("   {}", alignment.midline());
    println!("B: {}", alignment.aligned_b);

    println!("\nScore: {}", alignment.score);
    println!("  Length: {}", stats.length);
    println!("  Matches: {}", stats.matches);
    println!("  Mismatches: {}", stats.mismatches);
    println!("  Gaps: {}", stats.gaps);
    println!("  Identity: {:.2}%", stats.identity * 100.0);
}

fn print_json_alignment(
    a: &Sequence,
    b: &Sequence,
    scheme: &ScoringScheme,
    alignment: &Alignment,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "sequence_a": a.to_string(),
        "sequence_b": b.to_string(),
        "aligned_a": alignment.aligned_a,
        "aligned_b": alignment.aligned_b,
        "alignment_text": alignment.alignment_text(),
        "score": alignment.score,
        "scoring": scheme,
        "stats": alignment.stats(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_alignment(alignment: &Alignment) {
    let stats = alignment.stats();
    println!("aligned_a\taligned_b\tscore\tmatches\tmismatches\tgaps\tidentity");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{:.4}",
        alignment.aligned_a,
        alignment.aligned_b,
        alignment.score,
        stats.matches,
        stats.mismatches,
        stats.gaps,
        stats.identity,
    );
}
