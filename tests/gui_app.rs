use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};
use stopwatch_board::actions::Action;
use stopwatch_board::board::Board;
use stopwatch_board::clock::{ManualClock, ReferenceInstant};
use stopwatch_board::gui::StopwatchApp;
use stopwatch_board::plugin::PluginManager;

fn new_app() -> (ManualClock, StopwatchApp) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap());
    let board = Board::new(Arc::new(clock.clone()), &ReferenceInstant::Now);
    let app = StopwatchApp::new(board, PluginManager::with_builtins(), Duration::from_secs(1));
    (clock, app)
}

#[test]
fn empty_query_lists_commands() {
    let (_clock, app) = new_app();
    assert!(app.results.iter().any(|a| a.action == "query:sw new "));
}

#[test]
fn query_action_fills_command_box() {
    let (_clock, mut app) = new_app();
    app.run_action(&Action::new("sw list", "Stopwatch", "query:sw list"));
    assert_eq!(app.query, "sw list");
    assert!(app.results.is_empty());
}

#[test]
fn save_dialog_creates_named_stopwatch() {
    let (_clock, mut app) = new_app();
    app.save_dialog.open = true;
    app.save_dialog.name = "Laundry".into();
    app.submit_save_dialog();
    assert!(!app.save_dialog.open);
    assert!(app.save_dialog.name.is_empty());
    assert_eq!(app.board.stopwatches()[0].name, "Laundry");
}

#[test]
fn tick_schedule_drives_running_stopwatches() {
    let (clock, mut app) = new_app();
    let id = app.board.create("A");
    app.board.toggle(&id);

    let start = Instant::now();
    for s in 1..=3 {
        clock.advance_ms(1_000);
        assert!(app.poll_tick(start + Duration::from_secs(s)));
    }
    assert!(!app.poll_tick(start + Duration::from_millis(3_500)));
    assert_eq!(app.board.registry().get(&id).unwrap().accumulated_ms, 3_000);
}

#[test]
fn tick_refreshes_active_query() {
    let (clock, mut app) = new_app();
    let id = app.board.create("A");
    app.board.toggle(&id);
    app.query = "sw list".into();
    app.search();
    assert_eq!(app.results[0].label, "A (0:00:00)");

    clock.advance_ms(2_000);
    assert!(app.poll_tick(Instant::now() + Duration::from_secs(2)));
    assert_eq!(app.results[0].label, "A (0:00:02)");
}

#[test]
fn shutdown_cancels_ticks() {
    let (clock, mut app) = new_app();
    let id = app.board.create("A");
    app.board.toggle(&id);
    app.shutdown();
    clock.advance_ms(5_000);
    assert!(!app.poll_tick(Instant::now() + Duration::from_secs(5)));
    assert_eq!(app.time_until_tick(Instant::now()), None);
}

#[test]
fn inline_rename_and_time_edit() {
    let (_clock, mut app) = new_app();
    let id = app.board.create("Old");

    app.begin_rename(&id);
    app.editing_name.as_mut().unwrap().buffer = "New".into();
    app.commit_rename();
    assert!(app.editing_name.is_none());
    assert_eq!(app.board.registry().get(&id).unwrap().name, "New");

    app.begin_time_edit(&id);
    assert_eq!(app.editing_time.as_ref().unwrap().buffer, "0:00:00");
    app.editing_time.as_mut().unwrap().buffer = "1:00:00".into();
    app.commit_time_edit();
    assert_eq!(app.board.registry().get(&id).unwrap().accumulated_ms, 3_600_000);

    app.begin_time_edit(&id);
    app.editing_time.as_mut().unwrap().buffer = "later".into();
    app.commit_time_edit();
    assert_eq!(app.board.registry().get(&id).unwrap().accumulated_ms, 3_600_000);
    assert!(app.error.is_none());
}

#[test]
fn failed_action_sets_error() {
    let (_clock, mut app) = new_app();
    app.run_action(&Action::new("bad", "x", "bogus"));
    assert!(app.error.as_deref().unwrap().contains("bogus"));
}

#[test]
fn draws_a_frame_headless() {
    let (_clock, mut app) = new_app();
    app.board.create("A");
    app.save_dialog.open = true;
    let ctx = eframe::egui::Context::default();
    let _ = ctx.run(Default::default(), |ctx| app.draw(ctx));
    assert_eq!(app.board.stopwatches().len(), 1);
    assert!(app.error.is_none());
}
