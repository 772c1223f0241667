//! A* solver for the 3x3 sliding-tile ("8-puzzle") problem.
//!
//! Given a scrambled board of tiles 1-8 plus a blank, the solver finds
//! a sequence of blank moves reaching the fixed goal configuration,
//! expanding states in order of `g + h` with the misplaced-tiles
//! heuristic. An unsolvable board exhausts the finite state space and
//! reports no solution.

pub mod board;
pub mod report;
pub mod solver;

// Re-export main types
pub use board::{Board, InvalidBoard, Move, GOAL};
pub use report::{render_transcript, NO_SOLUTION_MESSAGE};
pub use solver::{solve, SearchOutcome, SearchResult, Solution};
