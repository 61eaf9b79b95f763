use std::{fs, thread::sleep, time::Duration};

use tempfile::tempdir;

// The global subscriber can only be installed once per process, so this file
// holds a single test.
#[test]
fn writes_log_file_and_ignores_reinit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logs").join("log.txt");

    stopwatch_board::logging::init(true, Some(path.clone()));
    tracing::info!("first");
    stopwatch_board::logging::init(false, None);
    tracing::info!("second");

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("first"));
    assert!(contents.contains("second"));
}
