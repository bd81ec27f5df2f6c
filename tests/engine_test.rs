// Integration tests for move generation and snapshot replay

use hanoitty::puzzle::{generate, min_moves, solve, Move, Peg};
use hanoitty::snapshot::{compute_snapshots, state_after_k_moves, Snapshot};
use num_bigint::BigUint;
use proptest::prelude::*;

use Peg::{Center, Left, Right};

fn pegs(s: &Snapshot) -> [Vec<u32>; 3] {
    s.pegs.clone()
}

#[test]
fn test_one_disk() {
    let moves = solve(1, Left, Right);
    assert_eq!(moves, vec![Move::new(Left, Right)]);

    let snapshots = compute_snapshots(1, &moves, Left);
    assert_eq!(
        snapshots.iter().map(pegs).collect::<Vec<_>>(),
        vec![[vec![1], vec![], vec![]], [vec![], vec![], vec![1]]]
    );
}

#[test]
fn test_two_disks() {
    let moves = solve(2, Left, Right);
    assert_eq!(
        moves,
        vec![
            Move::new(Left, Center),
            Move::new(Left, Right),
            Move::new(Center, Right),
        ]
    );

    let snapshots = compute_snapshots(2, &moves, Left);
    assert_eq!(snapshots.len(), 4);
    assert_eq!(pegs(&snapshots[3]), [vec![], vec![], vec![2, 1]]);
}

#[test]
fn test_three_disks_from_center() {
    let moves = solve(3, Center, Right);
    assert_eq!(moves.len(), 7);
    // Auxiliary is the left peg
    assert!(moves.iter().any(|m| m.to == Left));

    let snapshots = compute_snapshots(3, &moves, Center);
    assert_eq!(snapshots.len(), 8);
    assert_eq!(pegs(&snapshots[0]), [vec![], vec![3, 2, 1], vec![]]);
    assert_eq!(pegs(&snapshots[7]), [vec![], vec![], vec![3, 2, 1]]);
}

#[test]
fn test_same_start_and_end() {
    for n in [0, 1, 5, 12] {
        for peg in Peg::ALL {
            let moves = solve(n, peg, peg);
            assert!(moves.is_empty());
            let snapshots = compute_snapshots(n, &moves, peg);
            assert_eq!(snapshots, vec![Snapshot::initial(n, peg)]);
            assert_eq!(snapshots[0].peg(peg).len(), n as usize);
        }
    }
}

#[test]
fn test_zero_disks() {
    let moves = solve(0, Left, Right);
    assert!(moves.is_empty());
    assert_eq!(min_moves(0), BigUint::from(0u32));
    assert_eq!(
        compute_snapshots(0, &moves, Left),
        vec![Snapshot::from_pegs([vec![], vec![], vec![]])]
    );
}

#[test]
fn test_min_moves_at_sixty_four() {
    let expected: BigUint = "18446744073709551615".parse().unwrap();
    assert_eq!(min_moves(64), expected);
    assert!(min_moves(64) > BigUint::from(u32::MAX));
    // One more disk needs one more bit than u64 holds
    assert_eq!(min_moves(65), (expected << 1) + 1u32);
}

#[test]
fn test_every_start_end_pair_solves() {
    for start in Peg::ALL {
        for end in Peg::ALL {
            if start == end {
                continue;
            }
            let moves = solve(6, start, end);
            let last = state_after_k_moves(6, &moves, moves.len(), start);
            assert_eq!(last.peg(end), &[6, 5, 4, 3, 2, 1]);
            assert_eq!(last.disk_count(), 6);
        }
    }
}

proptest! {
    #[test]
    fn proptest_length_matches_formula(n in 0u32..=12) {
        let moves = generate(n, Left, Center, Right);
        prop_assert_eq!(BigUint::from(moves.len()), min_moves(n));
        prop_assert!(moves.iter().all(|m| m.from != m.to));
    }

    #[test]
    fn proptest_replay_is_legal_and_complete(
        n in 0u32..=10,
        start in 0i64..3,
        end in 0i64..3,
    ) {
        let start = Peg::try_from(start).unwrap();
        let end = Peg::try_from(end).unwrap();
        prop_assume!(start != end);
        let aux = Peg::other(start, end).unwrap();

        let moves = generate(n, start, end, aux);
        let snapshots = compute_snapshots(n, &moves, start);
        prop_assert_eq!(snapshots.len(), moves.len() + 1);

        for snapshot in &snapshots {
            prop_assert!(snapshot.is_valid(n));
        }

        let last = snapshots.last().unwrap();
        let expected: Vec<u32> = (1..=n).rev().collect();
        prop_assert_eq!(last.peg(end), expected.as_slice());
        prop_assert!(last.peg(start).is_empty());
        prop_assert!(last.peg(aux).is_empty());
    }

    #[test]
    fn proptest_single_state_matches_sequence(n in 0u32..=8, k in 0usize..300) {
        let moves = solve(n, Left, Right);
        let snapshots = compute_snapshots(n, &moves, Left);
        let k_clamped = k.min(moves.len());
        prop_assert_eq!(
            &state_after_k_moves(n, &moves, k, Left),
            &snapshots[k_clamped]
        );
    }

    #[test]
    fn proptest_arbitrary_moves_never_panic(
        n in 0u32..=5,
        raw in proptest::collection::vec((0i64..3, 0i64..3), 0..40),
    ) {
        let moves: Vec<Move> = raw
            .into_iter()
            .map(|(a, b)| Move::new(Peg::try_from(a).unwrap(), Peg::try_from(b).unwrap()))
            .collect();
        let snapshots = compute_snapshots(n, &moves, Center);
        prop_assert_eq!(snapshots.len(), moves.len() + 1);
        // Disks are never lost or duplicated, even by illegal moves
        for snapshot in &snapshots {
            prop_assert_eq!(snapshot.disk_count(), n as usize);
        }
    }
}
