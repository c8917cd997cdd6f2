//! Puzzle generation.
//!
//! Generation runs in two phases: a randomized backtracking pass fills an
//! empty grid with a complete, valid solution, then clues are removed one by
//! one in random order as long as the puzzle keeps a unique solution. All
//! randomness comes from one [`SeededRng`] created per call, so the result
//! is a pure function of difficulty and seed.

use crate::board::{Cell, Digit, Sudoku};
use crate::brute_force::candidates;
use crate::consts::N_CELLS;
use crate::rng::SeededRng;

use std::fmt;
use std::ops::RangeInclusive;

/// Difficulty tier of a generated puzzle.
///
/// The tier determines how many clues the generator aims to leave
/// in the puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 36 to 45 clues.
    Easy,
    /// 27 to 35 clues.
    Medium,
    /// 22 to 26 clues.
    Hard,
}

impl Difficulty {
    /// All difficulty tiers, from most to least clues.
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// The inclusive clue-count range this tier aims for.
    pub fn clue_range(self) -> RangeInclusive<u8> {
        match self {
            Difficulty::Easy => 36..=45,
            Difficulty::Medium => 27..=35,
            Difficulty::Hard => 22..=26,
        }
    }

    // the same numeric seed has to yield a different stream per tier
    fn seed_offset(self) -> u32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// A generated puzzle together with the solved grid it was carved from.
///
/// Every clue of `puzzle` agrees with `solution`, and `puzzle` has exactly
/// one completion, namely `solution`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle, with some cells blanked out.
    pub puzzle: Sudoku,
    /// The complete grid the puzzle derives from.
    pub solution: Sudoku,
}

// Helper struct for the two generation phases
struct SudokuGenerator {
    grid: Sudoku,
    rng: SeededRng,
}

impl SudokuGenerator {
    fn new(rng: SeededRng) -> SudokuGenerator {
        SudokuGenerator {
            grid: Sudoku([0; N_CELLS]),
            rng,
        }
    }

    // Fill cells in flat-index order, trying the digits in a freshly
    // shuffled order at every cell and backtracking on dead ends.
    fn fill_from(&mut self, from: usize) -> bool {
        if from == N_CELLS {
            return true;
        }
        let legal = candidates(&self.grid, Cell::new(from as u8));

        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.rng.shuffle(&mut digits);

        for &num in digits.iter() {
            if !legal.contains(Digit::new(num)) {
                continue;
            }
            self.grid.0[from] = num;
            if self.fill_from(from + 1) {
                return true;
            }
        }
        self.grid.0[from] = 0;
        false
    }

    fn fill(&mut self) -> Sudoku {
        let filled = self.fill_from(0);
        // an empty 9x9 grid always has a completion; failing here
        // is a bug in the search, not an input condition
        assert!(filled, "failed to fill an empty grid");
        assert!(
            self.grid.validate().is_valid(),
            "freshly constructed grid breaks the rules"
        );
        self.grid
    }

    // Walk the cells in random order and blank every clue whose removal
    // keeps the solution unique, until only `target` clues remain.
    // A tier may plateau above its target if no further clue can be
    // removed without losing uniqueness.
    fn remove_clues(&mut self, target: u8) {
        let mut order = [0; N_CELLS];
        for (index, slot) in order.iter_mut().enumerate() {
            *slot = index as u8;
        }
        self.rng.shuffle(&mut order);

        let mut clues = self.grid.n_clues();
        for &index in order.iter() {
            if clues == target {
                break;
            }
            let index = index as usize;
            let removed = self.grid.0[index];
            if removed == 0 {
                continue;
            }
            self.grid.0[index] = 0;
            if self.grid.count_solutions(2) == 1 {
                clues -= 1;
            } else {
                self.grid.0[index] = removed;
            }
        }
    }
}

impl Sudoku {
    /// Generates a puzzle with a unique solution for the given difficulty.
    ///
    /// The result is deterministic in `(difficulty, seed)`: two calls with
    /// the same arguments return identical pairs, and the same seed yields
    /// a different puzzle per difficulty tier.
    pub fn generate(difficulty: Difficulty, seed: u32) -> GeneratedPuzzle {
        let rng = SeededRng::new(seed.wrapping_add(difficulty.seed_offset()));
        let mut generator = SudokuGenerator::new(rng);

        let solution = generator.fill();

        let range = difficulty.clue_range();
        let target = generator
            .rng
            .next_int(*range.start() as usize, *range.end() as usize) as u8;
        generator.remove_clues(target);

        GeneratedPuzzle {
            puzzle: generator.grid,
            solution,
        }
    }

    /// Generates a completely filled, valid sudoku. Deterministic in `seed`.
    pub fn generate_filled(seed: u32) -> Sudoku {
        SudokuGenerator::new(SeededRng::new(seed)).fill()
    }

    /// Generates a puzzle with a unique solution from a random seed.
    ///
    /// Convenience wrapper around [`Sudoku::generate`]; the result is not
    /// reproducible.
    pub fn generate_random(difficulty: Difficulty) -> GeneratedPuzzle {
        Sudoku::generate(difficulty, rand::random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_grid_is_solved_and_deterministic() {
        let first = Sudoku::generate_filled(7);
        let second = Sudoku::generate_filled(7);
        assert_eq!(first, second);
        assert!(first.is_solved());
        assert_eq!(first.n_clues(), 81);
    }

    #[test]
    fn filled_grids_vary_with_seed() {
        assert_ne!(Sudoku::generate_filled(1), Sudoku::generate_filled(2));
    }

    #[test]
    fn clue_ranges_are_ordered() {
        let mut previous_min = 82;
        for difficulty in Difficulty::all().iter() {
            let range = difficulty.clue_range();
            assert!(range.start() <= range.end());
            assert!((*range.end() as u16) < previous_min);
            previous_min = *range.start() as u16;
        }
    }

    #[test]
    fn difficulty_labels() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
