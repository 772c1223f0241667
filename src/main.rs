//! CLI entry point for the 8-puzzle solver.
//!
//! Usage:
//!   eight-puzzle solve <board.json> [options]
//!   eight-puzzle solve --stdin [options]
//!
//! The board is a JSON 3x3 array of the values 0-8, 0 for the blank,
//! e.g. [[5,7,2],[0,8,6],[4,1,3]].
//!
//! Options:
//!   --json    Emit machine-readable JSON instead of a transcript

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use eight_puzzle::board::Board;
use eight_puzzle::report::{render_transcript, NO_SOLUTION_MESSAGE};
use eight_puzzle::solver::{solve, SearchOutcome, SearchResult};

#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(about = "A* solver for the 3x3 sliding-tile puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board and print the state sequence from initial to goal
    Solve {
        /// Path to board JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read board from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Emit machine-readable JSON instead of a transcript
        #[arg(long)]
        json: bool,
    },
}

/// Output format for `--json`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<u32>,
    nodes_expanded: usize,
    nodes_generated: usize,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<Board>>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { file, stdin, json } => {
            // Read board JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                process::exit(1);
            };

            // Parse and validate the board; a non-permutation fails here,
            // before any search runs
            let board: Board = match serde_json::from_str(&json_content) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("Error parsing board JSON: {}", e);
                    process::exit(1);
                }
            };

            // Run solver
            let result = solve(board);

            if json {
                let output = format_result(&result);
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                match &result.outcome {
                    SearchOutcome::Solved(solution) => {
                        print!("{}", render_transcript(&solution.path));
                    }
                    SearchOutcome::Exhausted => {
                        println!("{}", NO_SOLUTION_MESSAGE);
                    }
                }
            }

            // Exit with appropriate code
            if result.solution().is_some() {
                process::exit(0);
            } else {
                process::exit(1);
            }
        }
    }
}

fn format_result(result: &SearchResult) -> SolveOutput {
    let solution = result.solution();
    SolveOutput {
        solved: solution.is_some(),
        moves: solution.map(|s| s.moves),
        nodes_expanded: result.nodes_expanded,
        nodes_generated: result.nodes_generated,
        time_elapsed_ms: result.time_elapsed_ms,
        path: solution.map(|s| s.path.clone()),
    }
}
