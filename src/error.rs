//! Crate-wide error types.
//!
//! Follows the hand-rolled `Display` + `std::error::Error` convention used
//! throughout this codebase rather than a derive macro: each variant is
//! small enough that a derive buys nothing.

use std::fmt;

/// Errors produced while parsing and validating the program's command-line
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// Wrong number of positional arguments.
    WrongCount { found: usize },
    /// An argument was not a valid integer.
    NotAnInteger { which: &'static str, value: String },
    /// `N` was out of the accepted range.
    BoardSizeOutOfRange { n: i64 },
    /// `k` was negative.
    NegativeAttackCount { k: i64 },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::WrongCount { found } => {
                write!(f, "exactly 4 arguments (N, k, l, w) are required, found {found}")
            }
            ArgError::NotAnInteger { which, value } => {
                write!(f, "argument '{which}' is not a valid integer: '{value}'")
            }
            ArgError::BoardSizeOutOfRange { n } => {
                write!(f, "N must be equal to or larger than 2, found {n}")
            }
            ArgError::NegativeAttackCount { k } => {
                write!(f, "k must be equal to or larger than 0, found {k}")
            }
        }
    }
}

impl std::error::Error for ArgError {}

/// Fatal invariant violations surfaced once worker state has been allocated.
///
/// Every one of these is unrecoverable: the search code reports via
/// `log::error!` and panics rather than returning a sentinel. This type
/// exists so that the lower-level `MoveStack`/`SolutionSet`/`Bitboard` APIs
/// still have a typed `Result` that tests can assert against, before the
/// caller converts a violation into a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AqError {
    /// `N * N` exceeds the board's compile-time word capacity.
    BoardCapacity { n: usize, max_n: usize },
    /// `MoveStack::push` on a stack already at its reserved capacity.
    StackOverflow,
    /// `MoveStack::pop`/`peek` on an empty stack.
    StackUnderflow,
    /// `SolutionSet::add` attempted beyond `S_MAX`.
    SolutionOverflow { max: usize },
    /// A worker thread panicked instead of returning a result.
    WorkerPanicked { worker_id: usize },
}

impl fmt::Display for AqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AqError::BoardCapacity { n, max_n } => {
                write!(f, "board size {n} exceeds maximum supported size {max_n}")
            }
            AqError::StackOverflow => write!(f, "move stack overflow: capacity exhausted"),
            AqError::StackUnderflow => write!(f, "move stack underflow: pop on empty stack"),
            AqError::SolutionOverflow { max } => {
                write!(f, "solution set exceeded its capacity of {max}")
            }
            AqError::WorkerPanicked { worker_id } => {
                write!(f, "worker {worker_id} panicked during search")
            }
        }
    }
}

impl std::error::Error for AqError {}
