//! Error types for puzzle parameters
//!
//! The engine itself never fails: move generation and snapshot replay are
//! total functions. Errors only arise at the boundary, when raw integers from
//! the command line or the UI are turned into [`Peg`](super::Peg) values.

use thiserror::Error;

/// Errors raised while validating puzzle input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Peg index outside `0..=2`
    #[error("Invalid peg {index}: pegs are numbered 0, 1 and 2")]
    InvalidPeg { index: i64 },

    /// Peg argument that is not an integer at all
    #[error("Invalid peg '{input}': expected 0, 1 or 2")]
    UnparsablePeg { input: String },

    /// Disk count that is not an integer
    #[error("Invalid disk count '{input}'")]
    InvalidDiskCount { input: String },
}
