//! Playback cursor
//!
//! A [`Playback`] is an integer cursor `i` in `0..=len`, where `len` is the
//! number of moves in the current solution. Cursor `i` selects snapshot `i`
//! and the pending move `moves[i]` (none once `i == len`).
//!
//! Manual navigation always pauses playback. The timed driver calls
//! [`Playback::advance`], which stops playback by itself when the final
//! configuration is reached.

/// Cursor and play state for one solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    position: usize,
    len: usize,
    playing: bool,
}

impl Playback {
    /// Fresh cursor at the start of a solution of `len` moves
    pub fn new(len: usize) -> Self {
        Playback {
            position: 0,
            len,
            playing: false,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of moves; the last valid cursor position
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.len
    }

    /// Step forward one move. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        self.playing = false;
        self.step_forward()
    }

    /// Step back one move. Returns whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        self.playing = false;
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Jump to `k`, clamped to `0..=len`
    pub fn jump_to(&mut self, k: usize) {
        self.playing = false;
        self.position = k.min(self.len);
    }

    /// Jump to the final configuration
    pub fn jump_to_end(&mut self) {
        self.jump_to(self.len);
    }

    /// Back to the initial configuration
    pub fn reset(&mut self) {
        self.playing = false;
        self.position = 0;
    }

    /// Start or pause playback.
    ///
    /// Nothing happens when there are no moves. Starting from the final
    /// configuration rewinds to the beginning first. Returns the new state.
    pub fn toggle_playing(&mut self) -> bool {
        if self.len == 0 {
            self.playing = false;
            return false;
        }
        if self.playing {
            self.playing = false;
        } else {
            if self.is_at_end() {
                self.position = 0;
            }
            self.playing = true;
        }
        self.playing
    }

    /// One tick of the timed driver.
    ///
    /// Advances while playing and stops once the cursor reaches the end.
    /// Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let moved = self.step_forward();
        if self.is_at_end() {
            self.playing = false;
        }
        moved
    }

    /// Fraction of the solution already played, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            self.position as f64 / self.len as f64
        }
    }

    fn step_forward(&mut self) -> bool {
        if self.position >= self.len {
            return false;
        }
        self.position += 1;
        true
    }
}
