use crate::actions::Action;
use crate::board::Board;
use crate::common::{split_first_word, strip_word_ci};
use crate::format::parse_duration;
use crate::plugin::Plugin;
use crate::registry::Stopwatch;

const DESC: &str = "Stopwatch";

/// Saved stopwatches (prefix: `sw`).
pub struct StopwatchPlugin;

fn row_label(sw: &Stopwatch, board: &Board) -> String {
    let time = board.format(sw.accumulated_ms);
    if sw.is_running {
        format!("{} ({time})", sw.name)
    } else {
        format!("{} ({time}, paused)", sw.name)
    }
}

/// Entries addressed by `arg`: an exact id, otherwise a case-insensitive name
/// match. An empty argument selects everything.
fn matching<'a>(board: &'a Board, arg: &str) -> Vec<&'a Stopwatch> {
    if let Some(sw) = board.registry().get(arg) {
        return vec![sw];
    }
    let needle = arg.to_lowercase();
    board
        .registry()
        .iter()
        .filter(|sw| needle.is_empty() || sw.name.to_lowercase().contains(&needle))
        .collect()
}

fn per_entry(
    board: &Board,
    arg: &str,
    keep: impl Fn(&Stopwatch) -> bool,
    verb: &str,
    kind: &str,
) -> Vec<Action> {
    matching(board, arg)
        .into_iter()
        .filter(|&sw| keep(sw))
        .map(|sw| {
            Action::new(
                format!("{verb} {}", row_label(sw, board)),
                DESC,
                format!("stopwatch:{kind}:{}", sw.id),
            )
        })
        .collect()
}

impl Plugin for StopwatchPlugin {
    fn search(&self, query: &str, board: &Board) -> Vec<Action> {
        let Some(rest) = strip_word_ci(query.trim(), "sw") else {
            return Vec::new();
        };
        let (verb, arg) = split_first_word(rest);
        match verb.to_ascii_lowercase().as_str() {
            "" | "list" => board
                .registry()
                .iter()
                .map(|sw| {
                    Action::new(
                        row_label(sw, board),
                        DESC,
                        format!("stopwatch:toggle:{}", sw.id),
                    )
                })
                .collect(),
            "new" | "start" => {
                let label = if arg.is_empty() {
                    "Create stopwatch".to_string()
                } else {
                    format!("Create stopwatch {arg}")
                };
                vec![Action::new(label, DESC, format!("stopwatch:new:{arg}"))]
            }
            "toggle" => per_entry(board, arg, |_| true, "Toggle", "toggle"),
            "pause" => per_entry(board, arg, |sw| sw.is_running, "Pause", "toggle"),
            "resume" => per_entry(board, arg, |sw| !sw.is_running, "Resume", "toggle"),
            "reset" => per_entry(board, arg, |_| true, "Reset", "reset"),
            "rm" | "delete" => per_entry(board, arg, |_| true, "Delete", "delete"),
            "rename" => {
                let (id, name) = split_first_word(arg);
                match board.registry().get(id) {
                    Some(sw) if !name.is_empty() => vec![Action::new(
                        format!("Rename {} to {name}", sw.name),
                        DESC,
                        format!("stopwatch:rename:{}|{name}", sw.id),
                    )],
                    _ => Vec::new(),
                }
            }
            "set" => {
                let (id, time) = split_first_word(arg);
                match (board.registry().get(id), parse_duration(time)) {
                    (Some(sw), Some(ms)) => vec![Action::new(
                        format!("Set {} to {}", sw.name, board.format(ms)),
                        DESC,
                        format!("stopwatch:set:{}|{time}", sw.id),
                    )],
                    _ => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        "stopwatch"
    }

    fn description(&self) -> &str {
        "Saved stopwatches (prefix: `sw`)"
    }

    fn commands(&self) -> Vec<Action> {
        ["sw new ", "sw list", "sw pause", "sw resume", "sw reset", "sw rm"]
            .into_iter()
            .map(|q| Action::new(q.trim_end(), DESC, format!("query:{q}")))
            .collect()
    }
}
