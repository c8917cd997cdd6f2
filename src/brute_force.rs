//! Brute force search over blank cells.
//!
//! Solving walks the blank cells in flat-index order and tries the digits
//! `1..=9` in ascending order, backtracking when a cell has no legal digit
//! left. The cell and digit orders are fixed, so for a given grid the search
//! always visits the same states and returns the same result.

use crate::bitset::DigitSet;
use crate::board::{Cell, Digit, Sudoku};
use crate::validate::Violation;

/// Outcome of [`Sudoku::solve`]. Exactly one of the three cases applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The grid has at least one completion; this is the first one found.
    Solved(Sudoku),
    /// The grid satisfies all rules but has no completion.
    Unsolvable,
    /// The grid breaks the rules; the search was not attempted.
    Invalid(Vec<Violation>),
}

impl SolveOutcome {
    /// The solution, if one was found.
    pub fn solution(self) -> Option<Sudoku> {
        match self {
            SolveOutcome::Solved(sudoku) => Some(sudoku),
            _ => None,
        }
    }
}

impl Sudoku {
    /// Tries to find a solution to the sudoku.
    ///
    /// A grid that already breaks the rules is rejected without searching.
    /// Otherwise the search runs on a copy; the sudoku itself is unchanged.
    pub fn solve(&self) -> SolveOutcome {
        let validation = self.validate();
        if !validation.is_valid() {
            return SolveOutcome::Invalid(validation.into_violations());
        }
        let mut work = *self;
        if solve_from(&mut work, 0) {
            SolveOutcome::Solved(work)
        } else {
            SolveOutcome::Unsolvable
        }
    }

    /// Counts the solutions of the sudoku, stopping as soon as `limit` are found.
    ///
    /// `count_solutions(2)` distinguishes unsolvable (`0`), uniquely
    /// solvable (`1`) and ambiguous (`2`) grids without paying for a full
    /// enumeration. The grid is assumed to be rule-valid; duplicates among
    /// the clues simply lead to a count of `0`.
    pub fn count_solutions(&self, limit: usize) -> usize {
        let mut work = *self;
        let mut found = 0;
        count_from(&mut work, 0, limit, &mut found);
        found
    }
}

/// Digits that can legally be placed in `cell`: all digits minus those
/// already present in the cell's row, column and block.
pub(crate) fn candidates(grid: &Sudoku, cell: Cell) -> DigitSet {
    let row = grid.row(cell.row());
    let col = grid.col(cell.col());
    let block = grid.block(cell.block());

    let mut taken = DigitSet::NONE;
    for &num in row.iter().chain(col.iter()).chain(block.iter()) {
        if let Some(digit) = Digit::new_checked(num) {
            taken.insert(digit);
        }
    }
    DigitSet::ALL.without(taken)
}

fn first_blank(grid: &Sudoku, from: usize) -> Option<usize> {
    grid.0[from..].iter().position(|&num| num == 0).map(|offset| from + offset)
}

fn solve_from(grid: &mut Sudoku, from: usize) -> bool {
    let cell = match first_blank(grid, from) {
        Some(cell) => cell,
        // no blank cell left, the grid is a solution
        None => return true,
    };
    for digit in candidates(grid, Cell::new(cell as u8)) {
        grid.0[cell] = digit.get();
        if solve_from(grid, cell + 1) {
            return true;
        }
    }
    grid.0[cell] = 0;
    false
}

fn count_from(grid: &mut Sudoku, from: usize, limit: usize, found: &mut usize) {
    if *found >= limit {
        return;
    }
    let cell = match first_blank(grid, from) {
        Some(cell) => cell,
        None => {
            *found += 1;
            return;
        }
    };
    for digit in candidates(grid, Cell::new(cell as u8)) {
        grid.0[cell] = digit.get();
        count_from(grid, cell + 1, limit, found);
        if *found >= limit {
            break;
        }
    }
    grid.0[cell] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_excludes_all_houses() {
        let mut bytes = [0; 81];
        bytes[1] = 2; // row 0
        bytes[9] = 3; // column 0
        bytes[10] = 4; // block 0
        bytes[72] = 5; // column 0, bottom row
        let sudoku = Sudoku::from_bytes(bytes).unwrap();

        let free = candidates(&sudoku, Cell::new(0));
        let digits: Vec<u8> = free.into_iter().map(Digit::get).collect();
        assert_eq!(digits, [1, 6, 7, 8, 9]);
    }

    #[test]
    fn solved_grid_counts_once() {
        let line = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
        let sudoku = Sudoku::from_str_line(line).unwrap();
        assert_eq!(sudoku.count_solutions(2), 1);
        assert_eq!(sudoku.count_solutions(1), 1);
    }

    #[test]
    fn empty_grid_has_many_solutions() {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        assert_eq!(sudoku.count_solutions(1), 1);
        assert_eq!(sudoku.count_solutions(2), 2);
    }

    #[test]
    fn count_zero_limit_prunes_immediately() {
        let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
        assert_eq!(sudoku.count_solutions(0), 0);
    }

    #[test]
    fn solve_does_not_mutate_input() {
        let line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
        let sudoku = Sudoku::from_str_line(line).unwrap();
        let copy = sudoku;
        let _ = sudoku.solve();
        assert_eq!(sudoku, copy);
    }
}
