//! Checking a grid against the sudoku rules.
//!
//! A grid is valid if no row, column or block contains the same digit twice.
//! Blank cells never conflict. The validator reports every offending house,
//! not just the first one it finds.

use crate::bitset::DigitSet;
use crate::board::{Digit, House, Sudoku};
use crate::consts::N_CELLS;

/// A single broken rule found by [`validate`].
///
/// The `Display` impl produces a human-readable message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The grid does not contain exactly 81 cells.
    /// When this is reported, no other checks were performed.
    #[error("grid should contain 81 cells, found {0}")]
    Size(usize),
    /// A house contains the same digit more than once.
    #[error("{house} contains more than one {digit}")]
    Duplicate {
        /// The row, column or block in which the digit repeats.
        house: House,
        /// The repeated digit.
        digit: Digit,
    },
}

impl Violation {
    /// The house this violation occurred in. `None` for a size violation.
    pub fn house(&self) -> Option<House> {
        match *self {
            Violation::Size(_) => None,
            Violation::Duplicate { house, .. } => Some(house),
        }
    }

    /// The offending digit. `None` for a size violation.
    pub fn digit(&self) -> Option<Digit> {
        match *self {
            Violation::Size(_) => None,
            Violation::Duplicate { digit, .. } => Some(digit),
        }
    }
}

/// Result of [`validate`]: the complete list of violations found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    violations: Vec<Violation>,
}

impl Validation {
    /// Whether the grid satisfies all rules.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, in check order: rows 0-8, columns 0-8, blocks 0-8.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the outcome and returns the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Checks a grid for rule violations.
///
/// A grid that is not 81 cells long yields a single [`Violation::Size`]
/// and nothing else. Otherwise all 27 houses are scanned in fixed order
/// and each house reports at most its first duplicate digit.
pub fn validate(cells: &[u8]) -> Validation {
    if cells.len() != N_CELLS {
        return Validation {
            violations: vec![Violation::Size(cells.len())],
        };
    }

    let mut violations = vec![];
    for house in House::all() {
        let mut seen = DigitSet::NONE;
        for cell in house.cells().iter() {
            let digit = match Digit::new_checked(cells[cell.as_index()]) {
                Some(digit) => digit,
                None => continue,
            };
            if seen.contains(digit) {
                // only the first duplicate per house
                violations.push(Violation::Duplicate { house, digit });
                break;
            }
            seen.insert(digit);
        }
    }
    Validation { violations }
}

impl Sudoku {
    /// Checks this sudoku for rule violations, reporting every offending house.
    pub fn validate(&self) -> Validation {
        validate(&self.0)
    }
}
