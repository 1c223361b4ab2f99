//! Integration test: interpolated sampling on the classic board.
//!
//! A fast pointer can skip cells between ticks. With
//! [`PathSampling::Interpolated`] the gap is filled by a rook walk along x
//! first, then y, and every walked cell is checked like a hovered one.

use pathlink_core::{Cell, ConnectionId, PointerInput};
use pathlink_engine::{AbortReason, PathSampling, PlaySession, SessionConfig, Transition};
use pathlink_test_utils::{classic_levels, DragScript};

fn session(sampling: PathSampling) -> PlaySession {
    let _ = env_logger::builder().is_test(true).try_init();
    PlaySession::new(SessionConfig::new(classic_levels()).with_sampling(sampling)).unwrap()
}

#[test]
fn jump_is_filled_in() {
    let mut s = session(PathSampling::Interpolated);
    s.step(PointerInput::press(Cell::new(1, 9))).unwrap();
    let r = s.step(PointerInput::hold(Cell::new(5, 9))).unwrap();
    assert_eq!(
        r.transition,
        Transition::Extended {
            id: ConnectionId(1),
            cell: Cell::new(5, 9)
        }
    );
    let path: Vec<Cell> = (1..=5).map(|x| Cell::new(x, 9)).collect();
    assert_eq!(s.registry().path(0), path.as_slice());
}

#[test]
fn hovered_sampling_keeps_the_gap() {
    let mut s = session(PathSampling::Hovered);
    s.step(PointerInput::press(Cell::new(1, 9))).unwrap();
    s.step(PointerInput::hold(Cell::new(5, 9))).unwrap();
    assert_eq!(s.registry().path(0), &[Cell::new(1, 9), Cell::new(5, 9)]);
}

#[test]
fn walk_through_foreign_endpoint_aborts() {
    let mut s = session(PathSampling::Interpolated);
    s.step(PointerInput::press(Cell::new(1, 9))).unwrap();
    s.step(PointerInput::hold(Cell::new(5, 9))).unwrap();

    // x first: (6,9) (7,9) (8,9) (9,9), and (9,9) is connection 9's start.
    let r = s.step(PointerInput::hold(Cell::new(9, 7))).unwrap();
    assert_eq!(
        r.transition,
        Transition::Aborted {
            id: ConnectionId(1),
            reason: AbortReason::Blocked {
                cell: Cell::new(9, 9)
            }
        }
    );
    assert!(s.registry().path(0).is_empty());
    assert_eq!(s.grid().filled_count(), 0);
}

#[test]
fn walk_that_reaches_target_commits() {
    let mut s = session(PathSampling::Interpolated);
    let ticks = DragScript::new()
        .press((1, 9))
        .hold((5, 9))
        .hold((8, 7))
        .hold((9, 7))
        .build();
    let mut last = Transition::None;
    for t in ticks {
        last = s.step(t).unwrap().transition;
    }
    assert_eq!(
        last,
        Transition::Committed {
            id: ConnectionId(1)
        }
    );
    assert_eq!(s.registry().path(0).len(), 11);
    assert_eq!(s.grid().filled_count(), 11);
    for pair in s.registry().path(0).windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn walk_back_over_path_retracts() {
    let mut s = session(PathSampling::Interpolated);
    s.step(PointerInput::press(Cell::new(1, 9))).unwrap();
    s.step(PointerInput::hold(Cell::new(5, 9))).unwrap();
    let r = s.step(PointerInput::hold(Cell::new(3, 9))).unwrap();
    assert_eq!(
        r.transition,
        Transition::Retracted {
            id: ConnectionId(1),
            cell: Cell::new(4, 9)
        }
    );
    assert_eq!(
        s.registry().path(0),
        &[Cell::new(1, 9), Cell::new(2, 9), Cell::new(3, 9)]
    );
}
