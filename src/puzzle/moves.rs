//! Optimal move generation
//!
//! Moving `n` disks from `from` to `to` is done by moving the top `n - 1`
//! disks out of the way onto `aux`, moving the largest disk, then moving the
//! `n - 1` disks back on top of it. The recursion is the legality proof: no
//! move produced here ever places a larger disk on a smaller one.

use super::{Move, Peg};

/// Generate the optimal move list for the top `n` disks of `from`.
///
/// `from`, `to` and `aux` must be three distinct pegs. The result always has
/// exactly `2^n - 1` moves.
pub fn generate(n: u32, from: Peg, to: Peg, aux: Peg) -> Vec<Move> {
    let mut acc = Vec::with_capacity(move_capacity(n));
    generate_into(n, from, to, aux, &mut acc);
    acc
}

/// Recursive worker that appends into a shared buffer
fn generate_into(n: u32, from: Peg, to: Peg, aux: Peg, acc: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    generate_into(n - 1, from, aux, to, acc);
    acc.push(Move::new(from, to));
    generate_into(n - 1, aux, to, from, acc);
}

/// Generate the optimal move list for `n` disks from `start` to `end`.
///
/// The auxiliary peg is derived once here and threaded through the whole
/// recursion. When `start == end` nothing needs to move and the list is
/// empty.
pub fn solve(n: u32, start: Peg, end: Peg) -> Vec<Move> {
    let Some(aux) = Peg::other(start, end) else {
        log::debug!("start and end are both peg {start}, no moves needed");
        return Vec::new();
    };
    let moves = generate(n, start, end, aux);
    log::debug!(
        "generated {} moves for {} disks ({} -> {} via {})",
        moves.len(),
        n,
        start,
        end,
        aux
    );
    moves
}

/// Pre-allocation hint; only exact for sizes that are actually materialized
fn move_capacity(n: u32) -> usize {
    if n >= usize::BITS {
        0
    } else {
        (1usize << n) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Peg::{Center, Left, Right};

    #[test]
    fn test_single_disk() {
        assert_eq!(generate(1, Left, Right, Center), vec![Move::new(Left, Right)]);
    }

    #[test]
    fn test_two_disks() {
        assert_eq!(
            generate(2, Left, Right, Center),
            vec![
                Move::new(Left, Center),
                Move::new(Left, Right),
                Move::new(Center, Right),
            ]
        );
    }

    #[test]
    fn test_zero_disks() {
        assert!(generate(0, Left, Right, Center).is_empty());
        assert!(solve(0, Left, Right).is_empty());
    }

    #[test]
    fn test_solve_derives_aux() {
        // Auxiliary is the left peg, so the first move of an odd stack goes
        // straight to the end peg.
        let moves = solve(3, Center, Right);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Move::new(Center, Right));
        assert!(moves.iter().all(|m| m.from != m.to));
    }

    #[test]
    fn test_solve_same_peg() {
        assert!(solve(5, Right, Right).is_empty());
    }

    #[test]
    fn test_lengths() {
        for n in 0..=12 {
            assert_eq!(generate(n, Left, Center, Right).len(), (1usize << n) - 1);
        }
    }
}
