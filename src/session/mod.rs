//! Puzzle session state
//!
//! This module owns everything that changes while the program runs:
//! - [`PuzzleParams`]: disk count, start peg and end peg
//! - [`Solution`]: the move list and snapshot list derived from the params
//! - [`playback::Playback`]: the cursor into the solution
//!
//! # Regeneration
//!
//! Moves and snapshots are never edited. Any parameter change rebuilds the
//! whole [`Solution`] and a fresh cursor and swaps both in with a single
//! assignment, so a playback tick can never see a cursor that belongs to a
//! different solution.
//!
//! # Observers
//!
//! Callers interested in changes register a callback with
//! [`Session::subscribe`]. Every mutation reports one [`SessionEvent`].

pub mod playback;

use crate::puzzle::{self, Move, Peg};
use crate::snapshot::{compute_snapshots, Snapshot};
use num_bigint::BigUint;
use playback::Playback;

/// Parameters that fully determine a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleParams {
    pub disks: u32,
    pub start: Peg,
    pub end: Peg,
}

impl Default for PuzzleParams {
    fn default() -> Self {
        PuzzleParams {
            disks: 4,
            start: Peg::Left,
            end: Peg::Right,
        }
    }
}

/// Materialized solution for one set of parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub snapshots: Vec<Snapshot>,
}

impl Solution {
    /// Generate moves and snapshots for `params`.
    ///
    /// When start and end coincide the solution has no moves and a single
    /// snapshot, whatever the disk count. Otherwise returns `None` above
    /// [`puzzle::MAX_ANIMATED_DISKS`].
    pub fn generate(params: PuzzleParams) -> Option<Self> {
        if params.start == params.end {
            return Some(Solution {
                moves: Vec::new(),
                snapshots: vec![Snapshot::initial(params.disks, params.start)],
            });
        }
        if params.disks > puzzle::MAX_ANIMATED_DISKS {
            log::debug!(
                "{} disks exceeds the animation limit, reporting count only",
                params.disks
            );
            return None;
        }
        let moves = puzzle::solve(params.disks, params.start, params.end);
        let snapshots = compute_snapshots(params.disks, &moves, params.start);
        debug_assert!(snapshots.iter().all(|s| s.is_valid(params.disks)));
        Some(Solution { moves, snapshots })
    }
}

/// Change notification delivered to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Parameters changed and the solution was rebuilt
    Regenerated,
    /// The playback cursor moved
    CursorMoved { position: usize },
    /// Playback started or stopped
    PlaybackToggled { playing: bool },
}

/// Handle returned by [`Session::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&SessionEvent)>;

/// Current puzzle, its solution and the playback cursor
pub struct Session {
    params: PuzzleParams,
    solution: Option<Solution>,
    playback: Playback,
    min_moves: BigUint,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("params", &self.params)
            .field("playback", &self.playback)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Session {
    /// Create a session and generate its first solution.
    ///
    /// The disk count is clamped to [`puzzle::MIN_DISKS`]..=[`puzzle::MAX_DISKS`].
    pub fn new(params: PuzzleParams) -> Self {
        let params = PuzzleParams {
            disks: puzzle::clamp_disks(params.disks as i64),
            ..params
        };
        let solution = Solution::generate(params);
        let playback = Playback::new(solution.as_ref().map_or(0, |s| s.moves.len()));
        Session {
            params,
            min_moves: puzzle::min_moves(params.disks),
            solution,
            playback,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ========== Parameters ==========

    pub fn params(&self) -> PuzzleParams {
        self.params
    }

    pub fn disks(&self) -> u32 {
        self.params.disks
    }

    pub fn start_peg(&self) -> Peg {
        self.params.start
    }

    pub fn end_peg(&self) -> Peg {
        self.params.end
    }

    /// The auxiliary peg, or `None` when start and end coincide
    pub fn middle_peg(&self) -> Option<Peg> {
        Peg::other(self.params.start, self.params.end)
    }

    /// Change the disk count (clamped) and regenerate
    pub fn set_disks(&mut self, disks: i64) {
        let disks = puzzle::clamp_disks(disks);
        if disks == self.params.disks {
            return;
        }
        self.params.disks = disks;
        self.regenerate();
    }

    /// Change the start peg and regenerate.
    ///
    /// Picking the current end peg swaps start and end.
    pub fn set_start_peg(&mut self, start: Peg) {
        if start == self.params.start {
            return;
        }
        if start == self.params.end {
            log::debug!("start peg {start} equals end peg, swapping");
            self.params.end = self.params.start;
        }
        self.params.start = start;
        self.regenerate();
    }

    /// Change the end peg and regenerate.
    ///
    /// Picking the current start peg swaps start and end.
    pub fn set_end_peg(&mut self, end: Peg) {
        if end == self.params.end {
            return;
        }
        if end == self.params.start {
            log::debug!("end peg {end} equals start peg, swapping");
            self.params.start = self.params.end;
        }
        self.params.end = end;
        self.regenerate();
    }

    /// Replace all parameters at once, without the start/end swap
    pub fn set_params(&mut self, params: PuzzleParams) {
        self.params = PuzzleParams {
            disks: puzzle::clamp_disks(params.disks as i64),
            ..params
        };
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let solution = Solution::generate(self.params);
        let playback = Playback::new(solution.as_ref().map_or(0, |s| s.moves.len()));
        (self.solution, self.playback) = (solution, playback);
        self.min_moves = puzzle::min_moves(self.params.disks);
        log::debug!(
            "regenerated: {} disks, {} -> {}, {} moves",
            self.params.disks,
            self.params.start,
            self.params.end,
            self.playback.len()
        );
        self.notify(SessionEvent::Regenerated);
    }

    // ========== Derived data ==========

    /// Exact minimal move count, available for every disk count
    pub fn min_moves(&self) -> &BigUint {
        &self.min_moves
    }

    /// The materialized solution, `None` above the animation limit
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Whether there is anything to play back
    pub fn is_animatable(&self) -> bool {
        puzzle::is_animatable(self.params.disks, self.params.start, self.params.end)
    }

    pub fn moves(&self) -> &[Move] {
        match &self.solution {
            Some(solution) => &solution.moves,
            None => &[],
        }
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        match &self.solution {
            Some(solution) => &solution.snapshots,
            None => &[],
        }
    }

    /// Configuration at the cursor
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.snapshots().get(self.playback.position())
    }

    /// Move that will be applied next, `None` at the end
    pub fn pending_move(&self) -> Option<Move> {
        self.moves().get(self.playback.position()).copied()
    }

    // ========== Playback ==========

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn position(&self) -> usize {
        self.playback.position()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn next(&mut self) -> bool {
        let was_playing = self.playback.is_playing();
        let moved = self.playback.next();
        self.after_navigation(was_playing, moved);
        moved
    }

    pub fn prev(&mut self) -> bool {
        let was_playing = self.playback.is_playing();
        let moved = self.playback.prev();
        self.after_navigation(was_playing, moved);
        moved
    }

    pub fn jump_to(&mut self, k: usize) {
        let was_playing = self.playback.is_playing();
        let before = self.playback.position();
        self.playback.jump_to(k);
        self.after_navigation(was_playing, before != self.playback.position());
    }

    pub fn jump_to_end(&mut self) {
        self.jump_to(self.playback.len());
    }

    pub fn reset(&mut self) {
        self.jump_to(0);
    }

    /// Jump to the configuration right after move `index` (zero-based)
    pub fn select_move(&mut self, index: usize) {
        self.jump_to(index.saturating_add(1));
    }

    /// Start or pause playback; returns whether it is now playing
    pub fn toggle_playing(&mut self) -> bool {
        let before = self.playback;
        let playing = self.playback.toggle_playing();
        if before.position() != self.playback.position() {
            self.notify(SessionEvent::CursorMoved {
                position: self.playback.position(),
            });
        }
        if before.is_playing() != playing {
            self.notify(SessionEvent::PlaybackToggled { playing });
        }
        playing
    }

    /// One tick of the timed driver. Stops by itself at the end.
    pub fn advance_playback(&mut self) -> bool {
        let was_playing = self.playback.is_playing();
        let moved = self.playback.advance();
        if moved {
            self.notify(SessionEvent::CursorMoved {
                position: self.playback.position(),
            });
        }
        if was_playing && !self.playback.is_playing() {
            log::debug!("playback reached the end");
            self.notify(SessionEvent::PlaybackToggled { playing: false });
        }
        moved
    }

    fn after_navigation(&mut self, was_playing: bool, moved: bool) {
        if moved {
            self.notify(SessionEvent::CursorMoved {
                position: self.playback.position(),
            });
        }
        if was_playing {
            self.notify(SessionEvent::PlaybackToggled { playing: false });
        }
    }

    // ========== Observers ==========

    /// Register a callback invoked after every change
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: SessionEvent) {
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(PuzzleParams::default())
    }
}
