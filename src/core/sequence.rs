use thiserror::Error;

use crate::utils::validation::{is_valid_symbol, MAX_SEQUENCE_LENGTH};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { position: usize, symbol: char },

    #[error("Sequence too long: {0} exceeds maximum allowed ({MAX_SEQUENCE_LENGTH})")]
    TooLong(usize),
}

/// An immutable, validated sequence of symbols.
///
/// Every symbol is printable, non-whitespace ASCII other than the gap symbol `-`.
/// Empty sequences are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence {
    symbols: Vec<u8>,
}

impl Sequence {
    /// Validate raw text and build a sequence from it.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidSymbol` for the first character that is not
    /// a valid symbol (reported with its 0-based character position), or
    /// `SequenceError::TooLong` if the sequence exceeds the length limit.
    pub fn new(text: &str) -> Result<Self, SequenceError> {
        let length = text.chars().count();
        if length > MAX_SEQUENCE_LENGTH {
            return Err(SequenceError::TooLong(length));
        }

        if let Some((position, symbol)) = text
            .chars()
            .enumerate()
            .find(|&(_, c)| !u8::try_from(c).is_ok_and(is_valid_symbol))
        {
            return Err(SequenceError::InvalidSymbol { position, symbol });
        }

        Ok(Self {
            symbols: text.as_bytes().to_vec(),
        })
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl std::str::FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Symbols are validated ASCII
        f.write_str(&String::from_utf8_lossy(&self.symbols))
    }
}
