// Snapshot computation for step-by-step playback

use crate::puzzle::{Move, Peg};

/// Disks on one peg, bottom to top. The last element is the top disk.
pub type PegState = Vec<u32>;

/// Configuration of all three pegs at one instant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub pegs: [PegState; 3],
}

impl Snapshot {
    /// All `n` disks stacked on `start`, largest at the bottom
    pub fn initial(n: u32, start: Peg) -> Self {
        let mut snapshot = Snapshot::default();
        snapshot.pegs[start.index()] = (1..=n).rev().collect();
        snapshot
    }

    /// Build a snapshot from explicit peg contents (bottom to top)
    pub fn from_pegs(pegs: [PegState; 3]) -> Self {
        Snapshot { pegs }
    }

    /// Disks on `peg`, bottom to top
    pub fn peg(&self, peg: Peg) -> &[u32] {
        &self.pegs[peg.index()]
    }

    /// Top disk of `peg`, if any
    pub fn top(&self, peg: Peg) -> Option<u32> {
        self.pegs[peg.index()].last().copied()
    }

    /// Total number of disks across all pegs
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Apply a move in place.
    ///
    /// Moving from an empty peg does nothing. Returns whether a disk moved.
    pub fn apply(&mut self, mv: Move) -> bool {
        match self.pegs[mv.from.index()].pop() {
            Some(disk) => {
                self.pegs[mv.to.index()].push(disk);
                true
            }
            None => {
                log::trace!("move {mv} from an empty peg ignored");
                false
            }
        }
    }

    /// Check the configuration invariants for an `n`-disk puzzle: every size
    /// in `1..=n` appears exactly once, and every peg strictly decreases from
    /// bottom to top.
    pub fn is_valid(&self, n: u32) -> bool {
        let mut seen = vec![false; n as usize + 1];
        for peg in &self.pegs {
            if peg.windows(2).any(|w| w[0] <= w[1]) {
                return false;
            }
            for &disk in peg {
                if disk == 0 || disk > n || seen[disk as usize] {
                    return false;
                }
                seen[disk as usize] = true;
            }
        }
        seen.iter().skip(1).all(|&s| s)
    }
}

/// Replay `moves` from the initial configuration on `start`.
///
/// Index 0 of the result is the initial configuration and index `k` the
/// configuration after `k` moves, so the result always has
/// `moves.len() + 1` entries. Each entry is an independent copy.
pub fn compute_snapshots(n: u32, moves: &[Move], start: Peg) -> Vec<Snapshot> {
    let mut state = Snapshot::initial(n, start);
    let mut snapshots = Vec::with_capacity(moves.len() + 1);
    snapshots.push(state.clone());

    for &mv in moves {
        state.apply(mv);
        snapshots.push(state.clone());
    }

    debug_assert_eq!(snapshots.len(), moves.len() + 1);
    log::debug!("computed {} snapshots for {} disks", snapshots.len(), n);
    snapshots
}

/// Configuration after the first `k` moves, without materializing the whole
/// sequence. `k` is clamped to `0..=moves.len()`.
pub fn state_after_k_moves(n: u32, moves: &[Move], k: usize, start: Peg) -> Snapshot {
    let mut state = Snapshot::initial(n, start);
    for &mv in &moves[..k.min(moves.len())] {
        state.apply(mv);
    }
    state
}
