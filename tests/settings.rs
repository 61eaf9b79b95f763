use std::path::Path;
use stopwatch_board::clock::ReferenceInstant;
use stopwatch_board::format::HourScale;
use stopwatch_board::settings::Settings;
use tempfile::tempdir;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let s = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.tick_secs, 1.0);
    assert_eq!(s.hour_scale, HourScale::Plain);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"reference": {"kind": "days_ago", "days": 3}, "hour_scale": "abbreviated"}"#,
    )
    .unwrap();
    let s = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(s.reference, ReferenceInstant::DaysAgo { days: 3 });
    assert_eq!(s.hour_scale, HourScale::Abbreviated);
    assert_eq!(s.storage_file, "saved_stopwatches.json");
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "[1, 2").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let s = Settings {
        debug_logging: true,
        reference: ReferenceInstant::Fixed {
            at: "2024-12-31T23:00:00Z".into(),
        },
        ..Settings::default()
    };
    s.save(path.to_str().unwrap()).unwrap();
    assert_eq!(Settings::load(path.to_str().unwrap()).unwrap(), s);
}

#[test]
fn relative_paths_follow_settings_dir() {
    let s = Settings {
        log_file: Some("logs/board.log".into()),
        ..Settings::default()
    };
    let settings_path = Path::new("conf").join("settings.json");
    assert_eq!(
        s.storage_path(&settings_path),
        Path::new("conf").join("saved_stopwatches.json")
    );
    assert_eq!(
        s.log_path(&settings_path),
        Some(Path::new("conf").join("logs/board.log"))
    );
    assert_eq!(Settings::default().log_path(&settings_path), None);
}
