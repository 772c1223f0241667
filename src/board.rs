//! Board representation for the 3x3 sliding-tile puzzle.
//!
//! A board holds the tiles 1-8 plus the blank (0). Boards are small
//! value types: they are `Copy`, compared cell-by-cell, and validated
//! on construction so the rest of the crate can assume a proper
//! permutation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The fixed goal configuration the solver drives every board towards.
pub const GOAL: Board = Board {
    cells: [[1, 2, 3], [8, 0, 4], [7, 6, 5]],
};

/// Board validation failure: the cells are not a permutation of 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidBoard {
    /// A cell holds a value greater than 8
    #[error("cell value {0} is outside the range 0-8")]
    OutOfRange(u8),
    /// The same value appears in more than one cell
    #[error("cell value {0} appears more than once")]
    Duplicate(u8),
}

/// A move of the blank tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in the fixed expansion order used by the solver.
    ///
    /// The order is not semantically significant, but it is what breaks
    /// ties between equal-cost paths, so it stays fixed.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row/column offset applied to the blank position
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

/// A 3x3 sliding-tile board.
///
/// Serializes as a plain 3x3 array of numbers; deserialization runs the
/// same validation as [`Board::new`], so a parsed board is always a
/// valid permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[u8; 3]; 3]", into = "[[u8; 3]; 3]")]
pub struct Board {
    cells: [[u8; 3]; 3],
}

impl Board {
    /// Build a board from raw cells, checking that every value 0-8
    /// appears exactly once.
    pub fn new(cells: [[u8; 3]; 3]) -> Result<Self, InvalidBoard> {
        let mut seen = [false; 9];
        for row in &cells {
            for &value in row {
                if value > 8 {
                    return Err(InvalidBoard::OutOfRange(value));
                }
                if seen[value as usize] {
                    return Err(InvalidBoard::Duplicate(value));
                }
                seen[value as usize] = true;
            }
        }
        Ok(Self { cells })
    }

    /// Get the value at a cell
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Check whether this board matches the goal configuration
    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Locate the blank (0) cell.
    pub fn blank_position(&self) -> (usize, usize) {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == 0 {
                    return (row, col);
                }
            }
        }
        unreachable!("a validated board always contains a blank")
    }

    /// The nine cells in row-major order, used as the closed-set key.
    ///
    /// Two boards with identical layouts produce identical keys no
    /// matter how they were reached.
    pub fn canonical_key(&self) -> [u8; 9] {
        let mut key = [0u8; 9];
        for row in 0..3 {
            for col in 0..3 {
                key[row * 3 + col] = self.cells[row][col];
            }
        }
        key
    }

    /// Misplaced-tiles heuristic: the number of non-blank tiles not in
    /// their goal cell.
    ///
    /// Range 0-8. Zero exactly when the board is the goal. Never
    /// overestimates the true remaining move count (each misplaced tile
    /// needs at least one move), which is what makes A* optimal here.
    pub fn misplaced_tiles(&self) -> u32 {
        let mut count = 0;
        for row in 0..3 {
            for col in 0..3 {
                let value = self.cells[row][col];
                if value != 0 && value != GOAL.cells[row][col] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Slide the blank one step in the given direction.
    ///
    /// `blank` must be this board's blank position; callers that track
    /// it (the solver caches it per node) avoid a rescan. Returns the
    /// new board and new blank position, or `None` if the move leaves
    /// the grid.
    pub fn slide(&self, blank: (usize, usize), mv: Move) -> Option<(Board, (usize, usize))> {
        let (dr, dc) = mv.delta();
        let row = blank.0 as i32 + dr;
        let col = blank.1 as i32 + dc;
        if !(0..3).contains(&row) || !(0..3).contains(&col) {
            return None;
        }
        let (row, col) = (row as usize, col as usize);

        let mut cells = self.cells;
        cells[blank.0][blank.1] = cells[row][col];
        cells[row][col] = 0;
        Some((Board { cells }, (row, col)))
    }

    /// Check whether this board can reach the goal at all.
    ///
    /// For a 3-wide puzzle a board reaches the goal exactly when both
    /// have the same inversion parity. The search driver does not
    /// consult this; an unsolvable board simply exhausts the frontier.
    pub fn is_solvable(&self) -> bool {
        self.count_inversions() % 2 == GOAL.count_inversions() % 2
    }

    /// Count pairs of non-blank tiles that appear out of order in
    /// row-major reading
    fn count_inversions(&self) -> usize {
        let flat = self.canonical_key();
        flat.iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                flat[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < value)
                    .count()
            })
            .sum()
    }
}

impl TryFrom<[[u8; 3]; 3]> for Board {
    type Error = InvalidBoard;

    fn try_from(cells: [[u8; 3]; 3]) -> Result<Self, InvalidBoard> {
        Board::new(cells)
    }
}

impl From<Board> for [[u8; 3]; 3] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_permutation() {
        let board = Board::new([[5, 7, 2], [0, 8, 6], [4, 1, 3]]).unwrap();
        assert_eq!(board.get(0, 0), 5);
        assert_eq!(board.get(1, 0), 0);
    }

    #[test]
    fn test_new_rejects_duplicate() {
        let result = Board::new([[1, 1, 3], [8, 0, 4], [7, 6, 5]]);
        assert_eq!(result, Err(InvalidBoard::Duplicate(1)));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let result = Board::new([[1, 2, 3], [8, 9, 4], [7, 6, 5]]);
        assert_eq!(result, Err(InvalidBoard::OutOfRange(9)));
    }

    #[test]
    fn test_goal_detection() {
        assert!(GOAL.is_goal());
        let off_by_one = Board::new([[1, 2, 3], [8, 4, 0], [7, 6, 5]]).unwrap();
        assert!(!off_by_one.is_goal());
    }

    #[test]
    fn test_blank_position() {
        assert_eq!(GOAL.blank_position(), (1, 1));
        let corner = Board::new([[1, 2, 3], [8, 4, 5], [7, 6, 0]]).unwrap();
        assert_eq!(corner.blank_position(), (2, 2));
    }

    #[test]
    fn test_canonical_key_is_row_major() {
        assert_eq!(GOAL.canonical_key(), [1, 2, 3, 8, 0, 4, 7, 6, 5]);
    }

    #[test]
    fn test_heuristic_zero_iff_goal() {
        assert_eq!(GOAL.misplaced_tiles(), 0);
        let one_off = Board::new([[1, 2, 3], [8, 4, 0], [7, 6, 5]]).unwrap();
        assert!(one_off.misplaced_tiles() > 0);
    }

    #[test]
    fn test_heuristic_excludes_blank() {
        // Only the 4 is misplaced; the blank being off-goal does not count
        let one_off = Board::new([[1, 2, 3], [8, 4, 0], [7, 6, 5]]).unwrap();
        assert_eq!(one_off.misplaced_tiles(), 1);
    }

    #[test]
    fn test_slide_bounds() {
        let corner = Board::new([[0, 1, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        let blank = corner.blank_position();
        assert!(corner.slide(blank, Move::Up).is_none());
        assert!(corner.slide(blank, Move::Left).is_none());

        let (down, new_blank) = corner.slide(blank, Move::Down).unwrap();
        assert_eq!(new_blank, (1, 0));
        assert_eq!(down.get(0, 0), 3);
        assert_eq!(down.get(1, 0), 0);
    }

    #[test]
    fn test_solvability_parity() {
        assert!(GOAL.is_solvable());
        // Swapping two non-blank tiles flips the parity
        let swapped = Board::new([[2, 1, 3], [8, 0, 4], [7, 6, 5]]).unwrap();
        assert!(!swapped.is_solvable());
        // The scrambled example instance is solvable
        let scrambled = Board::new([[5, 7, 2], [0, 8, 6], [4, 1, 3]]).unwrap();
        assert!(scrambled.is_solvable());
    }

    #[test]
    fn test_deserialization_validates() {
        let board: Board = serde_json::from_str("[[1,2,3],[8,0,4],[7,6,5]]").unwrap();
        assert!(board.is_goal());

        let duplicate = serde_json::from_str::<Board>("[[1,1,3],[8,0,4],[7,6,5]]");
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_display_layout() {
        assert_eq!(GOAL.to_string(), "1 2 3\n8 0 4\n7 6 5\n");
    }
}
