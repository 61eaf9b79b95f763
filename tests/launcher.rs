use chrono::{TimeZone, Utc};
use std::sync::Arc;
use stopwatch_board::actions::Action;
use stopwatch_board::board::Board;
use stopwatch_board::clock::{ManualClock, ReferenceInstant};
use stopwatch_board::launcher::launch_action;

fn setup() -> (ManualClock, Board) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap());
    let board = Board::new(Arc::new(clock.clone()), &ReferenceInstant::Now);
    (clock, board)
}

fn run(board: &mut Board, action: &str) -> anyhow::Result<()> {
    launch_action(board, &Action::new("test", "Stopwatch", action))
}

#[test]
fn stopwatch_lifecycle_through_actions() {
    let (clock, mut board) = setup();
    run(&mut board, "stopwatch:new:Tea").unwrap();
    let id = board.stopwatches()[0].id.clone();

    run(&mut board, &format!("stopwatch:toggle:{id}")).unwrap();
    clock.advance_ms(3_000);
    run(&mut board, &format!("stopwatch:toggle:{id}")).unwrap();
    assert_eq!(board.registry().get(&id).unwrap().accumulated_ms, 3_000);

    run(&mut board, &format!("stopwatch:rename:{id}|Green tea")).unwrap();
    assert_eq!(board.registry().get(&id).unwrap().name, "Green tea");

    run(&mut board, &format!("stopwatch:set:{id}|0:10:00")).unwrap();
    assert_eq!(board.registry().get(&id).unwrap().accumulated_ms, 600_000);

    run(&mut board, &format!("stopwatch:reset:{id}")).unwrap();
    assert_eq!(board.registry().get(&id).unwrap().accumulated_ms, 0);

    run(&mut board, &format!("stopwatch:delete:{id}")).unwrap();
    assert!(board.registry().is_empty());
}

#[test]
fn invalid_time_input_is_ignored() {
    let (_clock, mut board) = setup();
    let id = board.create("A");
    board.set_time_from_input(&id, "0:00:05");
    run(&mut board, &format!("stopwatch:set:{id}|five")).unwrap();
    assert_eq!(board.registry().get(&id).unwrap().accumulated_ms, 5_000);
}

#[test]
fn deleting_unknown_id_is_not_an_error() {
    let (_clock, mut board) = setup();
    board.create("A");
    let before = board.registry().clone();
    run(&mut board, "stopwatch:delete:does-not-exist").unwrap();
    assert_eq!(board.registry(), &before);
}

#[test]
fn display_only_actions_change_nothing() {
    let (_clock, mut board) = setup();
    run(&mut board, "main:show").unwrap();
    run(&mut board, "query:sw list").unwrap();
    run(&mut board, "stopwatch:show:1").unwrap();
    assert!(board.registry().is_empty());
}

#[test]
fn unknown_action_is_an_error() {
    let (_clock, mut board) = setup();
    let err = run(&mut board, "timer:start:5s").unwrap_err();
    assert!(err.to_string().contains("timer:start:5s"));
}
