use stopwatch_board::board::Board;
use stopwatch_board::clock::SystemClock;
use stopwatch_board::gui::StopwatchApp;
use stopwatch_board::logging;
use stopwatch_board::plugin::PluginManager;
use stopwatch_board::schedule::tick_period;
use stopwatch_board::settings::Settings;
use stopwatch_board::storage::StopwatchStore;

use eframe::egui;
use std::path::Path;
use std::sync::Arc;

const SETTINGS_FILE: &str = "settings.json";

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    let settings_path = Path::new(SETTINGS_FILE);
    logging::init(settings.debug_logging, settings.log_path(settings_path));

    let store = StopwatchStore::new(settings.storage_path(settings_path));
    let mut board = Board::with_store(Arc::new(SystemClock), &settings.reference, store);
    board.set_hour_scale(settings.hour_scale);

    let (w, h) = settings.window_size.unwrap_or((384.0, 560.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w, h])
            .with_min_inner_size([320.0, 360.0]),
        ..Default::default()
    };

    let tick = tick_period(settings.tick_secs);
    eframe::run_native(
        "Stopwatch",
        native_options,
        Box::new(move |_cc| {
            Box::new(StopwatchApp::new(board, PluginManager::with_builtins(), tick))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the stopwatch window: {e}"))?;
    Ok(())
}
