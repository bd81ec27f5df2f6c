//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`pegs`]: The three pegs with their disks and the pending move arrow
//! - [`moves`]: Numbered move list with the pending move highlighted
//! - [`info`]: Puzzle parameters, minimal step count and playback speed
//! - [`status`]: Status bar with keybindings and playback state
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function and, where the
//! pane needs more than a couple of values, a `*RenderData` struct that the
//! app fills from the session for every frame.

pub mod info;
pub mod moves;
pub mod pegs;
pub mod status;

// Re-export render functions for convenience
pub use info::{render_info_pane, InfoRenderData};
pub use moves::{render_moves_pane, MovesRenderData};
pub use pegs::{render_pegs_pane, PegsRenderData};
pub use status::render_status_bar;
