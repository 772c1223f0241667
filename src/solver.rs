//! A* search over board states with the misplaced-tiles heuristic.
//!
//! The driver seeds a min-priority frontier with the initial board,
//! repeatedly expands the lowest-`f` candidate, and stops when it pops
//! the goal or runs the frontier dry. Every generated node lives in an
//! arena for the duration of the search so parent links stay valid for
//! path reconstruction.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use smallvec::SmallVec;

use crate::board::{Board, Move};

/// Stable handle into the node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct NodeId(usize);

/// A candidate state in the search tree
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    board: Board,
    /// Moves from the initial board to this node
    g: u32,
    /// Misplaced-tiles estimate of moves remaining
    h: u32,
    /// Priority: `g + h`, lower is expanded first
    f: u32,
    /// Cached blank location, avoids rescanning the board on expansion
    blank: (usize, usize),
    parent: Option<NodeId>,
}

/// Arena holding every node generated during one search.
///
/// Nodes are never removed mid-search: a parent must outlive all of its
/// descendants, and the cheapest way to guarantee that is to free the
/// whole arena at once when the search returns.
struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Frontier entry, ordered by `f` then by insertion sequence.
///
/// The derived lexicographic order plus `Reverse` in the heap makes
/// `pop` return the lowest `f`, and among equal `f` the earliest push.
/// Tie-breaking therefore is deterministic within a run and across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    f: u32,
    seq: u64,
    id: NodeId,
}

/// Min-priority open set
struct Frontier {
    heap: BinaryHeap<Reverse<OpenEntry>>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, f: u32, id: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(OpenEntry { f, seq, id }));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse(entry)| entry.id)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Closed set keyed by the canonical board layout.
///
/// Duplicate frontier entries for a board are expected (lazy deletion);
/// the membership check after popping is what actually prevents
/// re-expansion.
struct ClosedSet {
    visited: HashSet<[u8; 9]>,
}

impl ClosedSet {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
        }
    }

    fn mark(&mut self, board: &Board) {
        self.visited.insert(board.canonical_key());
    }

    fn contains(&self, board: &Board) -> bool {
        self.visited.contains(&board.canonical_key())
    }
}

/// Generate the children reachable by one blank move.
///
/// Moves are tried in the fixed [`Move::ALL`] order; a corner blank
/// yields 2 children, an edge blank 3, the center 4.
fn expand(arena: &NodeArena, id: NodeId) -> SmallVec<[SearchNode; 4]> {
    let parent = arena.get(id);
    let mut children = SmallVec::new();
    for mv in Move::ALL {
        if let Some((board, blank)) = parent.board.slide(parent.blank, mv) {
            let g = parent.g + 1;
            let h = board.misplaced_tiles();
            children.push(SearchNode {
                board,
                g,
                h,
                f: g + h,
                blank,
                parent: Some(id),
            });
        }
    }
    children
}

/// Walk parent links from the goal node back to the root, then reverse
/// so the path reads initial-to-goal
fn reconstruct_path(arena: &NodeArena, goal: NodeId) -> Vec<Board> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(id) = current {
        let node = arena.get(id);
        path.push(node.board);
        current = node.parent;
    }
    path.reverse();
    path
}

/// A solved search: the board sequence from initial to goal
#[derive(Debug, Clone)]
pub struct Solution {
    /// Boards from the initial state (index 0) to the goal (last);
    /// consecutive entries differ by exactly one blank move
    pub path: Vec<Board>,
    /// Number of moves, equals `path.len() - 1`
    pub moves: u32,
}

/// Terminal state of the search
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// Goal reached; holds the reconstructed path
    Solved(Solution),
    /// Frontier exhausted without reaching the goal.
    ///
    /// A normal outcome for unsolvable boards, not an error: the state
    /// space is finite (at most 9!/2 boards reachable), so the search
    /// always terminates.
    Exhausted,
}

/// Result of running the solver
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    /// Nodes popped and expanded (closed-set size)
    pub nodes_expanded: usize,
    /// Nodes created, including duplicates still sitting in the frontier
    pub nodes_generated: usize,
    /// Wall-clock time of the search in milliseconds
    pub time_elapsed_ms: u64,
}

impl SearchResult {
    /// The solution, if the search reached the goal
    pub fn solution(&self) -> Option<&Solution> {
        match &self.outcome {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// Run A* from `initial` towards the fixed goal configuration.
///
/// The board has already been validated by construction, so the search
/// itself cannot fail; it returns either a solution or exhaustion.
pub fn solve(initial: Board) -> SearchResult {
    let start_time = Instant::now();

    let mut arena = NodeArena::new();
    let mut frontier = Frontier::new();
    let mut closed = ClosedSet::new();
    let mut nodes_expanded: usize = 0;

    let h = initial.misplaced_tiles();
    let root = SearchNode {
        board: initial,
        g: 0,
        h,
        f: h,
        blank: initial.blank_position(),
        parent: None,
    };
    let root_f = root.f;
    let root_id = arena.insert(root);
    frontier.push(root_f, root_id);

    while !frontier.is_empty() {
        let id = frontier.pop().unwrap();
        let node = arena.get(id);

        if node.board.is_goal() {
            let moves = node.g;
            let path = reconstruct_path(&arena, id);
            return SearchResult {
                outcome: SearchOutcome::Solved(Solution { path, moves }),
                nodes_expanded,
                nodes_generated: arena.len(),
                time_elapsed_ms: start_time.elapsed().as_millis() as u64,
            };
        }

        // Stale duplicate popped after its board was already expanded
        if closed.contains(&node.board) {
            continue;
        }
        closed.mark(&node.board);
        nodes_expanded += 1;

        for child in expand(&arena, id) {
            // Pre-filter only; the pop-time check above stays authoritative
            if closed.contains(&child.board) {
                continue;
            }
            let f = child.f;
            let child_id = arena.insert(child);
            frontier.push(f, child_id);
        }
    }

    SearchResult {
        outcome: SearchOutcome::Exhausted,
        nodes_expanded,
        nodes_generated: arena.len(),
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}
