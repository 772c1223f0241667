//! Human-readable rendering of solver output.
//!
//! The transcript labels the initial board, then each board after move
//! 1..N, separated by blank lines.

use crate::board::Board;

/// Printed when the frontier is exhausted without reaching the goal
pub const NO_SOLUTION_MESSAGE: &str = "No Solution Found";

/// Render a solution path as a transcript.
///
/// The first board is labeled `Initial State:`, each following board
/// `Move k:` for k = 1..N.
pub fn render_transcript(path: &[Board]) -> String {
    let mut out = String::new();
    for (index, board) in path.iter().enumerate() {
        if index == 0 {
            out.push_str("Initial State:\n");
        } else {
            out.push_str(&format!("Move {}:\n", index));
        }
        out.push_str(&board.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GOAL;

    #[test]
    fn test_transcript_single_state() {
        let transcript = render_transcript(&[GOAL]);
        assert_eq!(transcript, "Initial State:\n1 2 3\n8 0 4\n7 6 5\n\n");
    }

    #[test]
    fn test_transcript_labels_moves() {
        let start = Board::new([[1, 2, 3], [8, 4, 0], [7, 6, 5]]).unwrap();
        let transcript = render_transcript(&[start, GOAL]);
        assert!(transcript.starts_with("Initial State:\n1 2 3\n8 4 0\n7 6 5\n\n"));
        assert!(transcript.contains("Move 1:\n1 2 3\n8 0 4\n7 6 5\n"));
        assert!(!transcript.contains("Move 2:"));
    }
}
