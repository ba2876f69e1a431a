//! Centralized validation helpers and resource limits.

/// Maximum number of symbols allowed in a single sequence
pub const MAX_SEQUENCE_LENGTH: usize = 100_000;

/// Maximum number of cells in a score matrix (~1 GiB of `i32`)
pub const MAX_MATRIX_CELLS: usize = 250_000_000;

/// Maximum number of data rows in an input table (DOS protection)
pub const MAX_TABLE_ROWS: usize = 1_000_000;

/// Maximum absolute value of any scoring constant.
///
/// Together with [`MAX_SEQUENCE_LENGTH`] this keeps every matrix cell within `i32`.
pub const MAX_SCORE_MAGNITUDE: i32 = 10_000;

/// The gap symbol used in aligned sequences
pub const GAP: u8 = b'-';

/// Check whether a byte may appear in an input sequence.
///
/// Symbols must be printable, non-whitespace ASCII and must not collide with
/// the gap symbol.
///
/// # Examples
///
/// ```
/// use nw_align::utils::validation::is_valid_symbol;
///
/// assert!(is_valid_symbol(b'A'));
/// assert!(is_valid_symbol(b'*'));
/// assert!(!is_valid_symbol(b'-'));
/// assert!(!is_valid_symbol(b' '));
/// assert!(!is_valid_symbol(0xC3));
/// ```
#[must_use]
pub fn is_valid_symbol(symbol: u8) -> bool {
    symbol.is_ascii_graphic() && symbol != GAP
}

/// Number of cells needed for a `(rows) x (cols)` matrix, or `None` if it
/// would exceed [`MAX_MATRIX_CELLS`].
#[must_use]
pub fn matrix_cells(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols).filter(|&cells| cells <= MAX_MATRIX_CELLS)
}

/// Check if adding another row would exceed `limit` (normally [`MAX_TABLE_ROWS`]).
///
/// Call this with the current count BEFORE adding a new row.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_row_limit(count: usize, limit: usize) -> Option<String> {
    if count >= limit {
        Some(format!(
            "Too many rows: adding another would exceed maximum of {limit}"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_symbol() {
        for &b in b"ACGTUNacgtun*.#" {
            assert!(is_valid_symbol(b), "{} should be valid", b as char);
        }
        for &b in b"- \t\r\n\0" {
            assert!(!is_valid_symbol(b));
        }
    }

    #[test]
    fn test_matrix_cells() {
        assert_eq!(matrix_cells(1, 1), Some(1));
        assert_eq!(matrix_cells(6, 5), Some(30));
        assert_eq!(matrix_cells(MAX_MATRIX_CELLS, 1), Some(MAX_MATRIX_CELLS));
        assert_eq!(matrix_cells(MAX_MATRIX_CELLS, 2), None);
        assert_eq!(matrix_cells(usize::MAX, 2), None);
    }

    #[test]
    fn test_check_row_limit() {
        assert!(check_row_limit(0, MAX_TABLE_ROWS).is_none());
        assert!(check_row_limit(MAX_TABLE_ROWS - 1, MAX_TABLE_ROWS).is_none());
        assert!(check_row_limit(MAX_TABLE_ROWS, MAX_TABLE_ROWS).is_some());
        assert!(check_row_limit(2, 2).unwrap().contains("maximum of 2"));
    }

    #[test]
    fn test_limits_fit_in_i32() {
        // Worst case: every position of both sequences paired with a gap
        let worst = 2 * MAX_SEQUENCE_LENGTH as i64 * i64::from(MAX_SCORE_MAGNITUDE);
        assert!(worst < i64::from(i32::MAX));
    }
}
