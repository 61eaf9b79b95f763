use crate::actions::Action;
use crate::board::Board;
use crate::plugin::Plugin;

/// Shows the main stopwatch (prefix: `main`).
pub struct MainClockPlugin;

impl Plugin for MainClockPlugin {
    fn search(&self, query: &str, board: &Board) -> Vec<Action> {
        if crate::common::strip_word_ci(query.trim(), "main").is_none() {
            return Vec::new();
        }
        let time = board.main_display();
        let since = board.time_source().started_on();
        vec![Action::new(
            format!("Main stopwatch {time} (since {since})"),
            "Main stopwatch",
            "main:show",
        )]
    }

    fn name(&self) -> &str {
        "main_clock"
    }

    fn description(&self) -> &str {
        "Elapsed time since the reference instant (prefix: `main`)"
    }

    fn commands(&self) -> Vec<Action> {
        vec![Action::new("main", "Main stopwatch", "query:main")]
    }
}
