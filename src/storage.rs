use crate::registry::Stopwatch;
use std::path::{Path, PathBuf};

pub const STOPWATCH_FILE: &str = "saved_stopwatches.json";

pub fn load_stopwatches(path: &Path) -> anyhow::Result<Vec<Stopwatch>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let list: Vec<Stopwatch> = serde_json::from_str(&content)?;
    Ok(list)
}

pub fn save_stopwatches(path: &Path, stopwatches: &[Stopwatch]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(stopwatches)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}

/// The on-disk home of the registry.
#[derive(Debug, Clone)]
pub struct StopwatchStore {
    path: PathBuf,
}

impl StopwatchStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved list. A missing file is an empty list; unreadable or
    /// malformed content is logged and also counts as no stopwatches.
    pub fn load(&self) -> Vec<Stopwatch> {
        match load_stopwatches(&self.path) {
            Ok(list) => {
                tracing::debug!(count = list.len(), path = %self.path.display(), "loaded stopwatches");
                list
            }
            Err(e) => {
                tracing::warn!("failed to load {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    pub fn save(&self, stopwatches: &[Stopwatch]) -> anyhow::Result<()> {
        save_stopwatches(&self.path, stopwatches)
    }
}
