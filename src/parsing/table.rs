//! Delimited tables of sequence pairs.
//!
//! The first record is a header row. Every following non-blank record is one
//! alignment request: field 1 is sequence A, field 2 is sequence B, and any
//! further fields are carried through to the output unchanged.
//!
//! Reading and writing use the `csv` crate, so fields may be double-quoted
//! (with `""` as an escaped quote) to hold the delimiter or line breaks.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::alignment::Alignment;
use crate::core::sequence::{Sequence, SequenceError};
use crate::utils::validation::{check_row_limit, MAX_TABLE_ROWS};

/// Column names appended to the header row of the output table
pub const OUTPUT_COLUMNS: [&str; 2] = ["alignment text", "alignment score"];

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid table format: {0}")]
    InvalidFormat(String),

    #[error("Too many rows: {0} exceeds maximum allowed ({MAX_TABLE_ROWS})")]
    TooManyRows(usize),

    #[error("Invalid sequence in column {column} on line {line}: {source}")]
    InvalidSequence {
        line: u64,
        column: usize,
        #[source]
        source: SequenceError,
    },
}

/// One data row of the input table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based line number where the record starts
    pub line: u64,

    /// All fields of the row, at least two
    pub fields: Vec<String>,
}

impl TableRow {
    /// Validate the first two fields as sequences
    ///
    /// # Errors
    ///
    /// Returns `TableError::InvalidSequence` naming the line and 1-based column
    /// of the first field that is not a valid sequence.
    pub fn sequences(&self) -> Result<(Sequence, Sequence), TableError> {
        let parse = |column: usize| {
            Sequence::new(&self.fields[column - 1]).map_err(|source| {
                TableError::InvalidSequence {
                    line: self.line,
                    column,
                    source,
                }
            })
        };

        Ok((parse(1)?, parse(2)?))
    }
}

/// A parsed input table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceTable {
    pub header: Vec<String>,
    pub rows: Vec<TableRow>,
    pub delimiter: u8,
}

/// Pick the delimiter for a path from its extension: `,` for `.csv`, tab for
/// `.tsv` and `.txt`. A trailing `.gz` is ignored. Anything else is treated
/// as CSV.
#[must_use]
pub fn delimiter_for_path(path: &Path) -> u8 {
    let inner = if is_gzipped(path) {
        path.file_stem().map(Path::new).unwrap_or(path)
    } else {
        path
    };

    match inner
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("tsv" | "txt") => b'\t',
        _ => b',',
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read and parse a table file, decompressing gzip input.
///
/// When `delimiter` is `None` it is chosen from the file extension.
///
/// # Errors
///
/// Returns `TableError::Io` if the file cannot be opened, `TableError::Csv`
/// if it cannot be read or decoded, or any error from [`parse_table_text`].
pub fn parse_table_file(path: &Path, delimiter: Option<u8>) -> Result<SequenceTable, TableError> {
    let delimiter = delimiter.unwrap_or_else(|| delimiter_for_path(path));
    let file = File::open(path)?;

    debug!(
        "Reading {} (delimiter {:?})",
        path.display(),
        char::from(delimiter)
    );

    if is_gzipped(path) {
        read_table(GzDecoder::new(file), delimiter, MAX_TABLE_ROWS)
    } else {
        read_table(BufReader::new(file), delimiter, MAX_TABLE_ROWS)
    }
}

/// Parse table text with a header row.
///
/// # Errors
///
/// Returns `TableError::InvalidFormat` if there is no header row or a data row
/// has fewer than two fields, `TableError::Csv` for malformed or non-UTF-8
/// records, and `TableError::TooManyRows` if the row limit is exceeded.
pub fn parse_table_text(text: &str, delimiter: u8) -> Result<SequenceTable, TableError> {
    read_table(text.as_bytes(), delimiter, MAX_TABLE_ROWS)
}

fn read_table<R: Read>(
    input: R,
    delimiter: u8,
    max_rows: usize,
) -> Result<SequenceTable, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(input);

    let mut header = None;
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);

        if record.iter().all(|field| field.trim().is_empty()) {
            debug!("Skipping blank line {line}");
            continue;
        }

        let fields: Vec<String> = record.iter().map(str::to_string).collect();

        if header.is_none() {
            header = Some(fields);
            continue;
        }

        if fields.len() < 2 {
            return Err(TableError::InvalidFormat(format!(
                "Line {line} has fewer than 2 fields"
            )));
        }

        if check_row_limit(rows.len(), max_rows).is_some() {
            return Err(TableError::TooManyRows(rows.len() + 1));
        }

        rows.push(TableRow { line, fields });
    }

    let header =
        header.ok_or_else(|| TableError::InvalidFormat("Missing header row".to_string()))?;

    Ok(SequenceTable {
        header,
        rows,
        delimiter,
    })
}

/// Write the table augmented with `alignment text` and `alignment score`
/// columns.
///
/// # Errors
///
/// Returns `TableError::InvalidFormat` if `alignments` does not have one entry
/// per row, or `TableError::Csv`/`TableError::Io` on write failure.
pub fn write_results<W: Write>(
    out: &mut W,
    table: &SequenceTable,
    alignments: &[Alignment],
) -> Result<(), TableError> {
    if alignments.len() != table.rows.len() {
        return Err(TableError::InvalidFormat(format!(
            "{} alignments for {} rows",
            alignments.len(),
            table.rows.len()
        )));
    }

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .delimiter(table.delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(
        table
            .header
            .iter()
            .map(String::as_str)
            .chain(OUTPUT_COLUMNS),
    )?;

    for (row, alignment) in table.rows.iter().zip(alignments) {
        let text = alignment.alignment_text();
        let score = alignment.score.to_string();
        writer.write_record(
            row.fields
                .iter()
                .map(String::as_str)
                .chain([text.as_str(), score.as_str()]),
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write results to `path` atomically.
///
/// The table is written to a temporary file in the destination directory and
/// renamed over `path` only once complete, so a failure never leaves a
/// partial table behind. An existing target keeps its permissions; a new one
/// gets the same default mode as any freshly created file.
///
/// # Errors
///
/// Returns `TableError::Io` if the temporary file cannot be created, written
/// or moved into place, or any error from [`write_results`].
pub fn write_results_file(
    path: &Path,
    table: &SequenceTable,
    alignments: &[Alignment],
) -> Result<(), TableError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        // Subject to the process umask, like std::fs::File::create
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let temp = builder.tempfile_in(dir)?;

    if let Ok(metadata) = std::fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }

    {
        let mut writer = BufWriter::new(temp.as_file());
        write_results(&mut writer, table, alignments)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    debug!("Wrote {} rows to {}", table.rows.len(), path.display());
    Ok(())
}
