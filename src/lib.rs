//! # Introduction
//!
//! hanoitty computes the optimal solution of the Tower of Hanoi puzzle for
//! any disk count and any choice of start and end peg, then replays it one
//! move at a time in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! (disks, start, end) → Move Generator → Moves → Snapshot Engine → Snapshots → TUI
//! ```
//!
//! 1. [`puzzle`] — pegs, moves, the recursive move generator and the exact
//!    minimal step count `2^n - 1`.
//! 2. [`snapshot`] — replays a move list into the configuration after every
//!    move.
//! 3. [`session`] — owns the current parameters, the derived solution and the
//!    playback cursor, and notifies subscribers of changes.
//! 4. [`config`] — command-line arguments, peg names, disk colors and
//!    playback timing.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Limits
//!
//! Up to 64 disks are accepted. Moves and snapshots are only materialized up
//! to 12 disks (4095 moves); above that only the step count is reported.

pub mod config;
pub mod puzzle;
pub mod session;
pub mod snapshot;
pub mod ui;
