//! Per-worker depth-first search over one shared board.
//!
//! The DFS is iterative by design: recursion is replaced by an explicit
//! `frontier` stack of not-yet-explored moves and an `applied` stack of
//! moves currently on the board, synchronized by each move's recorded
//! `depth`. This lets a single mutable [`Bitboard`] stand in for what would
//! otherwise be `O(depth * N^2)` snapshot copies.

use log::{error, trace};

use crate::bitboard::Bitboard;
use crate::error::AqError;
use crate::mv::{Move, MoveStack};
use crate::solutions::SolutionSet;

/// A single worker's depth-first walk over its share of the initial
/// frontier.
pub struct SearchEngine {
    board: Bitboard,
    n: usize,
    k: i32,
    wrap: bool,
    frontier: MoveStack,
    applied: MoveStack,
    depth: u32,
    solutions: SolutionSet,
}

/// Frontier stacks are sized generously above `N^2`: although DFS depth is
/// bounded by `N^2` (enforced on `applied`), the number of *pending*
/// sibling expansions queued on `frontier` before they are explored can
/// exceed that, so its capacity is derived from `N` rather than fixed.
fn frontier_capacity(n: usize) -> usize {
    (n * n * n * n).max(64)
}

impl SearchEngine {
    /// Creates a new engine for an `n x n` board, given this worker's share
    /// of the initial frontier (see [`crate::partition::frontier_for_worker`]).
    ///
    /// # Errors
    /// Returns [`AqError::BoardCapacity`] if `n` exceeds the board's word
    /// capacity.
    pub fn new(n: usize, k: i32, wrap: bool, initial_frontier: Vec<Move>) -> Result<Self, AqError> {
        let board = Bitboard::new(n)?;
        let mut frontier = MoveStack::with_capacity(frontier_capacity(n));
        for m in initial_frontier {
            frontier.push(m).unwrap_or_else(|e| fatal(e));
        }
        Ok(SearchEngine {
            board,
            n,
            k,
            wrap,
            frontier,
            applied: MoveStack::with_capacity(n * n),
            depth: 0,
            solutions: SolutionSet::new(),
        })
    }

    /// Runs the search to completion, consuming the frontier.
    pub fn run(&mut self) {
        while !self.frontier.is_empty() {
            let m = self.frontier.pop().unwrap_or_else(|e| fatal(e));
            self.rewind_to_parent_of(&m);
            self.apply(m);
            self.check_solution();
            let children = self.expand(&m);
            if children == 0 {
                self.backtrack();
            }
        }
    }

    /// Consumes the engine, returning the accumulated solutions.
    #[must_use]
    pub fn into_solutions(self) -> SolutionSet {
        self.solutions
    }

    /// Rewinds the board to the exact parent configuration of `m`: while
    /// the top of `applied` was recorded at a depth `>= m.depth`, pop and
    /// undo it.
    fn rewind_to_parent_of(&mut self, m: &Move) {
        while let Ok(top) = self.applied.peek() {
            if top.depth < m.depth {
                break;
            }
            let undo = self.applied.pop().unwrap_or_else(|e| fatal(e));
            self.board.set_unoccupied(undo.row, undo.col);
            self.depth = self.depth.saturating_sub(1);
            trace!("rewound ({}, {})", undo.row, undo.col);
        }
    }

    fn apply(&mut self, mut m: Move) {
        self.board.set_occupied(m.row, m.col);
        m.applied = true;
        self.applied.push(m).unwrap_or_else(|e| fatal(e));
        self.depth = m.depth;
        trace!("applied ({}, {}) at depth {}", m.row, m.col, m.depth);
    }

    fn check_solution(&mut self) {
        let q = self.board.count_occupied();
        if q < self.solutions.max_queens() {
            return;
        }
        if self.board.max_attacks(self.wrap) != self.k || !self.board.all_has_same_attacks(self.wrap) {
            return;
        }
        if q > self.solutions.max_queens() {
            self.solutions.reset_to(q, self.board);
            trace!("new maximum: {q} queens");
        } else {
            self.solutions
                .add_if_new(self.board)
                .unwrap_or_else(|e| fatal(e));
        }
    }

    /// Pushes every legal child of `m` onto the frontier and returns how
    /// many were pushed.
    fn expand(&mut self, m: &Move) -> usize {
        let mut children = 0;
        for i in 0..self.n {
            for j in 0..self.n {
                if i == m.row || j == m.col || self.board.is_occupied(i, j) {
                    continue;
                }
                let a = if self.wrap {
                    self.board.cell_count_attacks_wrap(i, j)
                } else {
                    self.board.cell_count_attacks(i, j)
                };
                if a != -1 && a <= self.k && self.board.simulate_max_attacks(i, j, self.wrap) <= self.k {
                    self.frontier
                        .push(Move::new(i, j, self.depth + 1))
                        .unwrap_or_else(|e| fatal(e));
                    children += 1;
                }
            }
        }
        children
    }

    /// The current node was a leaf: undo it immediately.
    fn backtrack(&mut self) {
        let undo = self.applied.pop().unwrap_or_else(|e| fatal(e));
        self.board.set_unoccupied(undo.row, undo.col);
        self.depth = self.depth.saturating_sub(1);
        trace!("backtracked leaf ({}, {})", undo.row, undo.col);
    }

    #[cfg(test)]
    fn applied_depth_matches_count(&self) -> bool {
        self.applied.count() as u32 == self.depth
    }
}

/// Converts an otherwise-unreachable invariant violation into a panic with
/// a diagnostic: these are bugs, not recoverable conditions, so the
/// recommended design is to abort rather than return a sentinel further up
/// the call stack.
fn fatal(e: AqError) -> ! {
    error!("fatal search invariant violation: {e}");
    panic!("fatal search invariant violation: {e}");
}
