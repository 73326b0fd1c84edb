//! Bounded, de-duplicated accumulator of maximum-density solutions.

use crate::bitboard::Bitboard;
use crate::error::AqError;

/// Hard cap on the number of solutions a single [`SolutionSet`] may hold.
/// Exceeding it is a fatal condition — it documents an under-sized constant,
/// not a data loss the caller should quietly tolerate.
pub const S_MAX: usize = 4096;

/// An ordered collection of at most [`S_MAX`] distinct [`Bitboard`]
/// snapshots, all sharing the current `max_queens` population.
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    boards: Vec<Bitboard>,
    max_queens: usize,
}

impl SolutionSet {
    #[must_use]
    pub fn new() -> Self {
        SolutionSet { boards: Vec::new(), max_queens: 0 }
    }

    #[must_use]
    pub fn max_queens(&self) -> usize {
        self.max_queens
    }

    #[must_use]
    pub fn solutions(&self) -> &[Bitboard] {
        &self.boards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Discards every stored solution. Destructive — prior entries are not
    /// recoverable.
    pub fn reset_to(&mut self, max_queens: usize, first: Bitboard) {
        self.boards.clear();
        self.boards.push(first);
        self.max_queens = max_queens;
    }

    /// Appends `board` if no equal board is already stored.
    ///
    /// # Errors
    /// Returns [`AqError::SolutionOverflow`] if the set is already at
    /// [`S_MAX`].
    pub fn add_if_new(&mut self, board: Bitboard) -> Result<(), AqError> {
        if self.boards.iter().any(|b| b.equals(&board)) {
            return Ok(());
        }
        if self.boards.len() >= S_MAX {
            return Err(AqError::SolutionOverflow { max: S_MAX });
        }
        self.boards.push(board);
        Ok(())
    }
}
