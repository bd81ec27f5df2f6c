//! Puzzle vocabulary and the move generator
//!
//! This module provides the pure, stateless half of the engine:
//! - [`Peg`]: one of the three fixed slots
//! - [`Move`]: relocation of the top disk of one peg onto another
//! - [`moves`]: the recursive optimal move generator
//! - [`count`]: the closed-form minimal step count `2^n - 1`
//! - [`errors`]: boundary validation errors
//!
//! # Roles vs. slots
//!
//! A [`Peg`] names a physical slot (left, center, right). Which slot acts as
//! the start, end or auxiliary peg is decided per run by the caller.

pub mod count;
pub mod errors;
pub mod moves;

pub use count::{format_grouped, min_moves};
pub use errors::PuzzleError;
pub use moves::{generate, solve};

use std::fmt;

/// Largest disk count for which moves and snapshots are materialized
pub const MAX_ANIMATED_DISKS: u32 = 12;

/// Disk count bounds accepted from callers
pub const MIN_DISKS: u32 = 1;
pub const MAX_DISKS: u32 = 64;

/// One of the three peg slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Peg {
    Left,
    Center,
    Right,
}

impl Peg {
    /// All pegs in slot order
    pub const ALL: [Peg; 3] = [Peg::Left, Peg::Center, Peg::Right];

    /// Slot index in `0..=2`
    pub fn index(self) -> usize {
        match self {
            Peg::Left => 0,
            Peg::Center => 1,
            Peg::Right => 2,
        }
    }

    /// The one peg that is neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`, since the third peg is then ambiguous.
    pub fn other(a: Peg, b: Peg) -> Option<Peg> {
        if a == b {
            return None;
        }
        Peg::ALL.into_iter().find(|&p| p != a && p != b)
    }

    /// Next slot to the right, wrapping around
    pub fn cycle_next(self) -> Peg {
        Peg::ALL[(self.index() + 1) % 3]
    }
}

impl TryFrom<i64> for Peg {
    type Error = PuzzleError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Peg::Left),
            1 => Ok(Peg::Center),
            2 => Ok(Peg::Right),
            _ => Err(PuzzleError::InvalidPeg { index }),
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Move the top disk of `from` onto `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    pub fn new(from: Peg, to: Peg) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Whether a full solution should be generated for these parameters.
///
/// Moving a stack onto the peg it already sits on needs no moves, so it is
/// never animated regardless of size.
pub fn is_animatable(disks: u32, start: Peg, end: Peg) -> bool {
    disks <= MAX_ANIMATED_DISKS && start != end
}

/// Parse a peg index given on the command line
pub fn parse_peg(input: &str) -> Result<Peg, PuzzleError> {
    let index: i64 = input
        .trim()
        .parse()
        .map_err(|_| PuzzleError::UnparsablePeg {
            input: input.to_string(),
        })?;
    Peg::try_from(index)
}

/// Parse a disk count given on the command line and clamp it to
/// [`MIN_DISKS`]..=[`MAX_DISKS`]
pub fn parse_disks(input: &str) -> Result<u32, PuzzleError> {
    let n: i64 = input
        .trim()
        .parse()
        .map_err(|_| PuzzleError::InvalidDiskCount {
            input: input.to_string(),
        })?;
    Ok(clamp_disks(n))
}

/// Clamp any integer into the accepted disk range
pub fn clamp_disks(n: i64) -> u32 {
    n.clamp(MIN_DISKS as i64, MAX_DISKS as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peg_try_from() {
        assert_eq!(Peg::try_from(0), Ok(Peg::Left));
        assert_eq!(Peg::try_from(2), Ok(Peg::Right));
        assert_eq!(Peg::try_from(3), Err(PuzzleError::InvalidPeg { index: 3 }));
        assert!(Peg::try_from(-1).is_err());
    }

    #[test]
    fn test_other_peg() {
        assert_eq!(Peg::other(Peg::Left, Peg::Right), Some(Peg::Center));
        assert_eq!(Peg::other(Peg::Center, Peg::Right), Some(Peg::Left));
        assert_eq!(Peg::other(Peg::Center, Peg::Center), None);
    }

    #[test]
    fn test_animatable() {
        assert!(is_animatable(12, Peg::Left, Peg::Right));
        assert!(!is_animatable(13, Peg::Left, Peg::Right));
        assert!(!is_animatable(3, Peg::Center, Peg::Center));
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!(parse_peg(" 1 "), Ok(Peg::Center));
        assert!(parse_peg("x").is_err());
        assert_eq!(parse_disks("0"), Ok(1));
        assert_eq!(parse_disks("100"), Ok(64));
        assert_eq!(parse_disks("7"), Ok(7));
        assert!(parse_disks("seven").is_err());
    }
}
