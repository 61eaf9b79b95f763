use crate::actions::Action;
use crate::board::Board;

#[derive(Debug, PartialEq, Eq)]
enum ActionKind<'a> {
    Query(&'a str),
    MainShow,
    StopwatchNew { name: &'a str },
    StopwatchToggle(&'a str),
    StopwatchReset(&'a str),
    StopwatchDelete(&'a str),
    StopwatchRename { id: &'a str, name: &'a str },
    StopwatchSet { id: &'a str, time: &'a str },
    StopwatchShow(&'a str),
    Unknown(&'a str),
}

fn parse_action_kind(action: &Action) -> ActionKind<'_> {
    let s = action.action.as_str();
    if let Some(q) = s.strip_prefix("query:") {
        return ActionKind::Query(q);
    }
    if s == "main:show" {
        return ActionKind::MainShow;
    }
    if let Some(name) = s.strip_prefix("stopwatch:new:") {
        return ActionKind::StopwatchNew { name };
    }
    if let Some(id) = s.strip_prefix("stopwatch:toggle:") {
        return ActionKind::StopwatchToggle(id);
    }
    if let Some(id) = s.strip_prefix("stopwatch:reset:") {
        return ActionKind::StopwatchReset(id);
    }
    if let Some(id) = s.strip_prefix("stopwatch:delete:") {
        return ActionKind::StopwatchDelete(id);
    }
    if let Some(arg) = s.strip_prefix("stopwatch:rename:") {
        let (id, name) = arg.split_once('|').unwrap_or((arg, ""));
        return ActionKind::StopwatchRename { id, name };
    }
    if let Some(arg) = s.strip_prefix("stopwatch:set:") {
        let (id, time) = arg.split_once('|').unwrap_or((arg, ""));
        return ActionKind::StopwatchSet { id, time };
    }
    if let Some(id) = s.strip_prefix("stopwatch:show:") {
        return ActionKind::StopwatchShow(id);
    }
    ActionKind::Unknown(s)
}

/// Apply `action` to the board.
///
/// `query:` actions only change what the command box shows, so they are left
/// to the caller and do nothing here.
pub fn launch_action(board: &mut Board, action: &Action) -> anyhow::Result<()> {
    tracing::debug!(action = %action.action, "launching action");
    match parse_action_kind(action) {
        ActionKind::Query(q) => tracing::debug!(query = q, "query left to the caller"),
        ActionKind::MainShow => {}
        ActionKind::StopwatchShow(id) => tracing::debug!(%id, "show stopwatch"),
        ActionKind::StopwatchNew { name } => {
            board.create(name);
        }
        ActionKind::StopwatchToggle(id) => board.toggle(id),
        ActionKind::StopwatchReset(id) => board.reset(id),
        ActionKind::StopwatchDelete(id) => board.delete(id),
        ActionKind::StopwatchRename { id, name } => board.rename(id, name),
        ActionKind::StopwatchSet { id, time } => {
            board.set_time_from_input(id, time);
        }
        ActionKind::Unknown(s) => anyhow::bail!("unknown action: {s}"),
    }
    Ok(())
}
