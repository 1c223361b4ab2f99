//! Integration test: drag scenarios on the shipped boards.
//!
//! Drives a full [`PlaySession`] through press/drag/release sequences on
//! the classic 10×10 levels and checks the path, the filled layer, and the
//! endpoint map after each one.

use pathlink_core::{Cell, ConnectionId, LevelError, PointerInput};
use pathlink_engine::{AbortReason, PlaySession, SessionConfig, StepResult, Transition};
use pathlink_test_utils::{classic_level_two, classic_levels, corridor_level, DragScript};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn classic_session() -> PlaySession {
    init_logging();
    PlaySession::new(SessionConfig::new(classic_levels())).unwrap()
}

fn play(session: &mut PlaySession, ticks: Vec<PointerInput>) -> Vec<StepResult> {
    ticks
        .into_iter()
        .map(|t| session.step(t).unwrap())
        .collect()
}

fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
    raw.iter().map(|&c| c.into()).collect()
}

fn filled_cells(session: &PlaySession) -> Vec<Cell> {
    let grid = session.grid();
    (0..grid.cell_count())
        .filter(|&i| grid.filled()[i])
        .filter_map(|i| grid.cell_at(i))
        .collect()
}

/// Connection 1 on level one, (1,9) to (9,7), skirting connection 9's
/// endpoint at (9,9).
const CONN1_ROUTE: [(i32, i32); 10] = [
    (2, 9),
    (3, 9),
    (4, 9),
    (5, 9),
    (6, 9),
    (7, 9),
    (8, 9),
    (8, 8),
    (8, 7),
    (9, 7),
];

/// Connection 2 on level one, (8,4) to (9,8).
const CONN2_ROUTE: [(i32, i32); 5] = [(8, 5), (8, 6), (8, 7), (8, 8), (9, 8)];

// ── Scenario 1 ──────────────────────────────────────────────────

#[test]
fn release_short_of_target_aborts() {
    let mut s = classic_session();

    let r = s.step(PointerInput::press(Cell::new(1, 9))).unwrap();
    assert_eq!(
        r.transition,
        Transition::Grabbed {
            id: ConnectionId(1),
            discarded: None
        }
    );
    assert_eq!(s.active_connection(), Some(ConnectionId(1)));
    assert_eq!(s.registry().path(0), &[Cell::new(1, 9)]);

    play(&mut s, DragScript::new().drag(&[(2, 9), (3, 9)]).build());
    assert_eq!(s.registry().path(0), cells(&[(1, 9), (2, 9), (3, 9)]));
    assert_eq!(s.grid().filled_count(), 0);

    let r = s.step(PointerInput::release(Cell::new(9, 7))).unwrap();
    assert_eq!(
        r.transition,
        Transition::Aborted {
            id: ConnectionId(1),
            reason: AbortReason::ReleasedOffTarget {
                cell: Cell::new(9, 7)
            }
        }
    );
    assert!(s.registry().path(0).is_empty());
    assert_eq!(s.active_connection(), None);
    assert_eq!(s.grid().filled_count(), 0);
}

// ── Scenario 2 ──────────────────────────────────────────────────

#[test]
fn drag_to_target_and_release_commits() {
    let mut s = classic_session();
    let results = play(
        &mut s,
        DragScript::new()
            .press((1, 9))
            .drag(&CONN1_ROUTE)
            .release((9, 7))
            .build(),
    );

    // Reaching the target commits; the release that follows is idle.
    let commit = &results[results.len() - 2];
    assert_eq!(
        commit.transition,
        Transition::Committed {
            id: ConnectionId(1)
        }
    );
    assert_eq!(results.last().unwrap().transition, Transition::None);

    let conn = s.registry().get(0).unwrap();
    assert!(conn.is_done());
    assert_eq!(s.active_connection(), None);

    let path = s.registry().path(0).to_vec();
    assert_eq!(path.len(), 11);
    assert_eq!(path[0], Cell::new(1, 9));
    assert_eq!(path[10], Cell::new(9, 7));
    let mut filled = filled_cells(&s);
    let mut expected = path.clone();
    filled.sort();
    expected.sort();
    assert_eq!(filled, expected);
    assert!((s.fill_ratio() - 0.11).abs() < 1e-9);
}

#[test]
fn grab_from_either_endpoint() {
    let mut s = classic_session();
    let mut route: Vec<(i32, i32)> = CONN1_ROUTE.iter().rev().skip(1).copied().collect();
    route.push((1, 9));
    let results = play(&mut s, DragScript::new().press((9, 7)).drag(&route).build());
    assert_eq!(
        results.last().unwrap().transition,
        Transition::Committed {
            id: ConnectionId(1)
        }
    );
    assert_eq!(s.registry().path(0)[0], Cell::new(9, 7));
}

// ── Scenario 3 ──────────────────────────────────────────────────

#[test]
fn drag_through_committed_path_aborts() {
    let mut s = classic_session();
    play(
        &mut s,
        DragScript::new().press((8, 4)).drag(&CONN2_ROUTE).build(),
    );
    assert!(s.registry().get(1).unwrap().is_done());
    let before = filled_cells(&s);
    assert_eq!(before.len(), 6);

    let results = play(
        &mut s,
        DragScript::new()
            .press((1, 9))
            .drag(&[(2, 9), (3, 9), (4, 9), (5, 9), (6, 9), (7, 9), (8, 9), (8, 8)])
            .build(),
    );
    assert_eq!(
        results.last().unwrap().transition,
        Transition::Aborted {
            id: ConnectionId(1),
            reason: AbortReason::Blocked {
                cell: Cell::new(8, 8)
            }
        }
    );
    assert!(s.registry().path(0).is_empty());
    assert!(!s.registry().get(0).unwrap().is_done());
    assert_eq!(filled_cells(&s), before);
    assert!(s.registry().get(1).unwrap().is_done());
}

#[test]
fn foreign_endpoint_blocks() {
    let mut s = classic_session();
    let results = play(
        &mut s,
        DragScript::new()
            .press((1, 9))
            .drag(&[(1, 8)])
            .build(),
    );
    // (1,8) is connection 8's start.
    assert!(matches!(
        results.last().unwrap().transition,
        Transition::Aborted {
            reason: AbortReason::Blocked { .. },
            ..
        }
    ));
}

// ── Scenario 4 ──────────────────────────────────────────────────

#[test]
fn advance_resets_board_to_next_level() {
    let mut s = classic_session();
    play(
        &mut s,
        DragScript::new().press((8, 4)).drag(&CONN2_ROUTE).build(),
    );
    assert!(s.grid().filled_count() > 0);

    s.advance_level().unwrap();
    assert_eq!(s.level_index(), 1);
    assert_eq!(s.grid().filled_count(), 0);
    assert!(s.history().is_empty());

    let level = classic_level_two();
    let grid = s.grid();
    for i in 0..grid.cell_count() {
        let cell = grid.cell_at(i).unwrap();
        let expected = level
            .connections
            .iter()
            .rev()
            .find(|c| c.start == cell || c.end == cell)
            .map(|c| c.id);
        assert_eq!(grid.endpoint_at(cell), expected, "cell {cell}");
    }
    assert_eq!(s.registry().len(), 10);
    assert_eq!(s.registry().done_count(), 0);
}

#[test]
fn advance_past_last_level_changes_nothing() {
    let mut s = classic_session();
    s.advance_level().unwrap();
    assert!(s.is_last_level());
    play(
        &mut s,
        DragScript::new().press((7, 2)).drag(&[(7, 3), (7, 4), (7, 5), (7, 6)]).build(),
    );
    let filled = s.grid().filled_count();
    assert_eq!(filled, 5);

    let err = s.advance_level().unwrap_err();
    assert_eq!(
        err,
        LevelError::LevelIndexOutOfRange {
            requested: 2,
            count: 2
        }
    );
    assert_eq!(s.level_index(), 1);
    assert_eq!(s.grid().filled_count(), filled);
}

#[test]
fn restart_clears_progress() {
    let mut s = classic_session();
    play(
        &mut s,
        DragScript::new().press((8, 4)).drag(&CONN2_ROUTE).build(),
    );
    s.restart_level().unwrap();
    assert_eq!(s.level_index(), 0);
    assert_eq!(s.grid().filled_count(), 0);
    assert_eq!(s.registry().done_count(), 0);
}

// ── Backtrack ───────────────────────────────────────────────────

#[test]
fn backtrack_removes_exactly_one_point() {
    let mut s = classic_session();
    play(
        &mut s,
        DragScript::new().press((1, 9)).drag(&[(2, 9), (3, 9)]).build(),
    );
    let r = s.step(PointerInput::hold(Cell::new(2, 9))).unwrap();
    assert_eq!(
        r.transition,
        Transition::Retracted {
            id: ConnectionId(1),
            cell: Cell::new(3, 9)
        }
    );
    assert_eq!(s.registry().path(0), cells(&[(1, 9), (2, 9)]));

    // Back onto the start: retract again, then the path is just the seed.
    let r = s.step(PointerInput::hold(Cell::new(1, 9))).unwrap();
    assert!(matches!(r.transition, Transition::Retracted { .. }));
    assert_eq!(s.registry().path(0), &[Cell::new(1, 9)]);
}

// ── Commit idempotence ──────────────────────────────────────────

#[test]
fn regrab_and_recommit_same_path_is_idempotent() {
    let mut s = classic_session();
    let script = DragScript::new().press((1, 9)).drag(&CONN1_ROUTE).build();
    play(&mut s, script.clone());
    let first = s.grid().filled().to_vec();
    let first_path = s.registry().path(0).to_vec();

    let r = s.step(PointerInput::press(Cell::new(1, 9))).unwrap();
    match r.transition {
        Transition::Grabbed {
            id,
            discarded: Some(path),
        } => {
            assert_eq!(id, ConnectionId(1));
            assert_eq!(path.as_slice(), first_path.as_slice());
        }
        other => panic!("expected a grab with a discarded path, got {other:?}"),
    }
    assert_eq!(s.grid().filled_count(), 0);
    assert_eq!(s.registry().path(0), &[Cell::new(1, 9)]);
    assert!(!s.registry().get(0).unwrap().is_done());

    play(&mut s, script[1..].to_vec());
    assert_eq!(s.grid().filled(), first.as_slice());
    assert_eq!(s.registry().path(0), first_path.as_slice());
    assert!(s.registry().get(0).unwrap().is_done());
}

// ── Abort reversibility ─────────────────────────────────────────

#[test]
fn abort_restores_filled_layer() {
    let mut s = classic_session();
    play(
        &mut s,
        DragScript::new().press((8, 4)).drag(&CONN2_ROUTE).build(),
    );
    let before = s.grid().filled().to_vec();

    play(
        &mut s,
        DragScript::new()
            .press((1, 9))
            .drag(&[(2, 9), (3, 9), (4, 9)])
            .release_outside()
            .build(),
    );
    assert_eq!(s.grid().filled(), before.as_slice());
    assert_eq!(s.active_connection(), None);
}

#[test]
fn out_of_bounds_hold_keeps_drag_alive() {
    let mut s = classic_session();
    play(
        &mut s,
        DragScript::new()
            .press((1, 9))
            .hold((2, 9))
            .hold_outside()
            .hold((3, 9))
            .build(),
    );
    assert_eq!(s.active_connection(), Some(ConnectionId(1)));
    assert_eq!(s.registry().path(0), cells(&[(1, 9), (2, 9), (3, 9)]));
}

#[test]
fn completing_every_connection_completes_level() {
    let mut cfg = SessionConfig::new(vec![corridor_level()]);
    cfg.grid_size = 5;
    let mut s = PlaySession::new(cfg).unwrap();
    play(
        &mut s,
        DragScript::new()
            .press((0, 0))
            .drag(&[(1, 0), (2, 0), (3, 0), (4, 0)])
            .build(),
    );
    assert!(!s.is_level_complete());
    play(
        &mut s,
        DragScript::new()
            .press((4, 2))
            .drag(&[(3, 2), (2, 2), (1, 2), (0, 2)])
            .build(),
    );
    assert!(s.is_level_complete());
    assert!(s.view().is_complete());
}
