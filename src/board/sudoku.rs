use crate::board::positions::{Cell, House};
use crate::board::Digit;
use crate::consts::N_CELLS;
use crate::errors::{FromBytesError, FromBytesSliceError, LineParseError};

use std::fmt;

/// The main structure exposing all the functionality of the library.
///
/// A `Sudoku` is a 9×9 grid stored as 81 cells in row-major order.
/// `0` denotes a blank cell, `1..=9` a digit. It is a plain value type:
/// every operation that needs to mutate a grid works on its own copy and
/// the original is never observed to change.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a byte array. Each byte must be in the range of `0..=9`,
    /// where `0` means blank cell.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        if bytes.iter().any(|&byte| byte > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Sudoku(bytes))
    }

    /// Creates a sudoku from a byte slice. The slice must have length 81 and
    /// each byte must be in the range of `0..=9`, where `0` means blank cell.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Sudoku::from_bytes(array).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Creates a sudoku from an 81 character line. Digits `1..=9` are clues,
    /// `.`, `_` and `0` are blank cells. No other characters are allowed.
    pub fn from_str_line(line: &str) -> Result<Sudoku, LineParseError> {
        if line.len() != N_CELLS {
            return Err(LineParseError::InvalidLength(line.len()));
        }
        let mut grid = [0; N_CELLS];
        for (index, character) in line.chars().enumerate() {
            match character {
                '1'..='9' => grid[index] = character as u8 - b'0',
                '.' | '_' | '0' => (),
                _ => return Err(LineParseError::InvalidCharacter { index, character }),
            }
        }
        Ok(Sudoku(grid))
    }

    /// Returns the cells of the sudoku as an array of bytes, `0` meaning blank cell.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the digit in the given cell, or `None` if the cell is blank.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Returns the given row, left to right. `0` means blank cell.
    ///
    /// # Panic
    /// Panics, if `row` is not in the range of `0..9`.
    pub fn row(&self, row: u8) -> [u8; 9] {
        self.house(House::Row(row))
    }

    /// Returns the given column, top to bottom. `0` means blank cell.
    ///
    /// # Panic
    /// Panics, if `col` is not in the range of `0..9`.
    pub fn col(&self, col: u8) -> [u8; 9] {
        self.house(House::Col(col))
    }

    /// Returns the given block, row-major within the tile. `0` means blank cell.
    /// Blocks are numbered row-major over the 3×3 tiling of the board.
    ///
    /// # Panic
    /// Panics, if `block` is not in the range of `0..9`.
    pub fn block(&self, block: u8) -> [u8; 9] {
        self.house(House::Block(block))
    }

    pub(crate) fn house(&self, house: House) -> [u8; 9] {
        let mut values = [0; 9];
        for (value, cell) in values.iter_mut().zip(house.cells().iter()) {
            *value = self.0[cell.as_index()];
        }
        values
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Check whether the sudoku is completely filled and satisfies all rules.
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&num| num != 0) && self.validate().is_valid()
    }

    /// Returns an iterator over the cells of the sudoku, going from left to right,
    /// top to bottom. Blank cells are returned as `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&num| Digit::new_checked(num))
    }

    /// Returns a value that prints the sudoku as an 81 character line,
    /// blank cells as `.`.
    pub fn to_str_line(&self) -> SudokuLine {
        SudokuLine(self.0)
    }

    /// Returns a value that prints the sudoku as a 9×9 block with
    /// space between the 3×3 fields.
    pub fn display_block(&self) -> SudokuBlock {
        SudokuBlock(self.0)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str_line())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Sudoku({})", self.to_str_line())
    }
}

/// Sudoku as an 81 character line, blank cells as `.`.
/// Implements `Display` and is returned by [`Sudoku::to_str_line`].
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SudokuLine([u8; N_CELLS]);

impl fmt::Display for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &num in self.0.iter() {
            match num {
                0 => write!(f, ".")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Sudoku in a 9×9 block layout, blank cells as `_`.
/// Implements `Display` and is returned by [`Sudoku::display_block`].
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SudokuBlock([u8; N_CELLS]);

impl fmt::Display for SudokuBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in Cell::all() {
            match (cell.row(), cell.col()) {
                (0, 0) => (),
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate bands
                (_, 0) => writeln!(f)?,
                (_, 3) | (_, 6) => write!(f, " ")?, // separate stacks
                _ => (),
            }
            match self.0[cell.as_index()] {
                0 => write!(f, "_")?,
                num => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use crate::consts::N_CELLS;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    // Human readable formats get the line representation,
    // binary formats the raw cell bytes.
    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.collect_str(&self.to_str_line())
            } else {
                serializer.serialize_bytes(&self.0)
            }
        }
    }

    struct SudokuVisitor;

    impl<'de> Visitor<'de> for SudokuVisitor {
        type Value = Sudoku;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an 81 character sudoku line or 81 bytes")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Sudoku, E> {
            Sudoku::from_str_line(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Sudoku, E> {
            Sudoku::from_bytes_slice(value).map_err(de::Error::custom)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Sudoku, A::Error> {
            let mut bytes = [0; N_CELLS];
            for (index, byte) in bytes.iter_mut().enumerate() {
                *byte = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(index, &self))?;
            }
            Sudoku::from_bytes(bytes).map_err(de::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Sudoku, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(SudokuVisitor)
            } else {
                deserializer.deserialize_bytes(SudokuVisitor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_project_houses() {
        let mut bytes = [0; 81];
        bytes[9] = 1; // row 1, col 0
        bytes[17] = 9; // row 1, col 8
        bytes[44] = 5; // row 4, col 8, block 5
        let sudoku = Sudoku::from_bytes(bytes).unwrap();

        assert_eq!(sudoku.row(1), [1, 0, 0, 0, 0, 0, 0, 0, 9]);
        assert_eq!(sudoku.col(8), [0, 9, 0, 0, 5, 0, 0, 0, 0]);
        assert_eq!(sudoku.block(5), [0, 0, 0, 0, 0, 5, 0, 0, 0]);
    }

    #[test]
    fn rejects_bytes_out_of_range() {
        let mut bytes = [0; 81];
        bytes[80] = 10;
        assert!(Sudoku::from_bytes(bytes).is_err());
    }

    #[test]
    fn rejects_wrong_slice_length() {
        match Sudoku::from_bytes_slice(&[0; 80]) {
            Err(FromBytesSliceError::WrongLength(80)) => (),
            other => panic!("expected WrongLength error, got {:?}", other),
        }
    }

    #[test]
    fn line_roundtrip() {
        let line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
        let sudoku = Sudoku::from_str_line(line).unwrap();
        assert_eq!(sudoku.to_str_line().to_string(), line);
        assert_eq!(sudoku.n_clues(), 27);
    }

    #[test]
    fn line_rejects_invalid_character() {
        let line = "x..2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
        match Sudoku::from_str_line(line) {
            Err(LineParseError::InvalidCharacter {
                index: 0,
                character: 'x',
            }) => (),
            other => panic!("expected InvalidCharacter error, got {:?}", other),
        }
    }
}
