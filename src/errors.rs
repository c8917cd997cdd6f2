#[cfg(doc)]
use crate::Sudoku;

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(FromBytesError),
}

/// Error for [`Sudoku::from_str_line`]
#[derive(Debug, thiserror::Error)]
pub enum LineParseError {
    /// Line is not 81 characters long
    #[error("line should contain 81 characters, found {0}")]
    InvalidLength(usize),
    /// Line contains a character that is neither a digit nor a blank marker
    #[error("invalid character `{character}` at position {index}")]
    InvalidCharacter {
        /// Position of the offending character in the line
        index: usize,
        /// The offending character
        character: char,
    },
}
