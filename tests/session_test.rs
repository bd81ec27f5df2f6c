// Integration tests for the session state container and playback

use hanoitty::config::{Labels, PlaybackConfig};
use hanoitty::puzzle::{min_moves, Move, Peg};
use hanoitty::session::{PuzzleParams, Session, SessionEvent};
use std::cell::RefCell;
use std::rc::Rc;

fn params(disks: u32, start: Peg, end: Peg) -> PuzzleParams {
    PuzzleParams { disks, start, end }
}

#[test]
fn test_play_to_end_auto_stops() {
    let mut session = Session::new(params(3, Peg::Left, Peg::Right));
    assert!(session.toggle_playing());

    let mut ticks = 0;
    while session.advance_playback() {
        ticks += 1;
    }

    assert_eq!(ticks, 7);
    assert_eq!(session.position(), 7);
    assert!(!session.is_playing());
    assert_eq!(session.pending_move(), None);
    assert_eq!(
        session.current_snapshot().unwrap().peg(Peg::Right),
        &[3, 2, 1]
    );
}

#[test]
fn test_pending_move_follows_cursor() {
    let mut session = Session::new(params(2, Peg::Left, Peg::Right));
    assert_eq!(session.pending_move(), Some(Move::new(Peg::Left, Peg::Center)));
    session.next();
    assert_eq!(session.pending_move(), Some(Move::new(Peg::Left, Peg::Right)));
    session.jump_to(99);
    assert_eq!(session.position(), 3);
    assert_eq!(session.pending_move(), None);
}

#[test]
fn test_large_puzzle_reports_count_only() {
    let session = Session::new(params(40, Peg::Left, Peg::Right));
    assert!(session.solution().is_none());
    assert!(session.moves().is_empty());
    assert!(session.snapshots().is_empty());
    assert!(session.current_snapshot().is_none());
    assert!(!session.is_animatable());
    assert_eq!(session.min_moves(), &min_moves(40));
}

#[test]
fn test_disk_count_is_clamped() {
    let mut session = Session::new(params(0, Peg::Left, Peg::Right));
    assert_eq!(session.disks(), 1);
    session.set_disks(1000);
    assert_eq!(session.disks(), 64);
    assert_eq!(session.min_moves().to_string(), "18446744073709551615");
    session.set_disks(-5);
    assert_eq!(session.disks(), 1);
}

#[test]
fn test_same_peg_session() {
    let session = Session::new(params(5, Peg::Center, Peg::Center));
    assert!(!session.is_animatable());
    assert!(session.moves().is_empty());
    assert_eq!(session.snapshots().len(), 1);
    assert_eq!(session.middle_peg(), None);
    assert_eq!(
        session.current_snapshot().unwrap().peg(Peg::Center),
        &[5, 4, 3, 2, 1]
    );
}

#[test]
fn test_same_peg_session_above_animation_limit() {
    for disks in [13, 64] {
        let session = Session::new(params(disks, Peg::Center, Peg::Center));
        assert!(!session.is_animatable());
        assert!(session.moves().is_empty());
        assert_eq!(session.snapshots().len(), 1);
        assert_eq!(session.pending_move(), None);

        let current = session.current_snapshot().unwrap();
        assert_eq!(current.peg(Peg::Center).len(), disks as usize);
        assert_eq!(current.top(Peg::Center), Some(1));
        assert!(current.peg(Peg::Left).is_empty());
        assert!(current.peg(Peg::Right).is_empty());
    }
}

#[test]
fn test_toggle_without_moves_does_nothing() {
    let mut session = Session::new(params(3, Peg::Right, Peg::Right));
    assert!(!session.toggle_playing());
    assert!(!session.is_playing());
}

#[test]
fn test_regeneration_during_playback() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);

    let mut session = Session::new(params(4, Peg::Left, Peg::Right));
    session.subscribe(move |e| sink.borrow_mut().push(*e));

    session.toggle_playing();
    session.advance_playback();
    session.advance_playback();
    session.set_end_peg(Peg::Center);

    assert_eq!(session.position(), 0);
    assert!(!session.is_playing());
    assert_eq!(session.middle_peg(), Some(Peg::Right));
    assert_eq!(session.moves().len(), 15);
    assert_eq!(
        *log.borrow(),
        vec![
            SessionEvent::PlaybackToggled { playing: true },
            SessionEvent::CursorMoved { position: 1 },
            SessionEvent::CursorMoved { position: 2 },
            SessionEvent::Regenerated,
        ]
    );
}

#[test]
fn test_select_move_and_move_list_text() {
    let mut session = Session::new(params(2, Peg::Left, Peg::Right));
    session.select_move(1);
    assert_eq!(session.position(), 2);

    let labels = Labels::from_input(Some("A,B,C"), None);
    assert_eq!(
        labels.move_list_text(session.moves()),
        "1. A -> B\n2. A -> C\n3. B -> C"
    );
}

#[test]
fn test_playback_config_speed_keys() {
    let mut playback = PlaybackConfig::default();
    playback.faster();
    playback.faster();
    assert_eq!(playback.speed(), 1.2);
    assert_eq!(playback.step_interval().as_millis(), 500);
}
