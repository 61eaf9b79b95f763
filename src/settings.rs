use crate::clock::ReferenceInstant;
use crate::format::HourScale;
use crate::storage::STOPWATCH_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that receives log output in addition to stdout.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Starting point of the main stopwatch.
    #[serde(default)]
    pub reference: ReferenceInstant,
    #[serde(default)]
    pub hour_scale: HourScale,
    /// Seconds between ticks. Defaults to `1.0`.
    #[serde(default = "default_tick_secs")]
    pub tick_secs: f32,
    /// File holding the saved stopwatches, relative to the settings file.
    #[serde(default = "default_storage_file")]
    pub storage_file: String,
    #[serde(default = "default_window_size")]
    pub window_size: Option<(f32, f32)>,
}

fn default_tick_secs() -> f32 {
    1.0
}

fn default_storage_file() -> String {
    STOPWATCH_FILE.into()
}

fn default_window_size() -> Option<(f32, f32)> {
    Some((384.0, 560.0))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            reference: ReferenceInstant::default(),
            hour_scale: HourScale::default(),
            tick_secs: default_tick_secs(),
            storage_file: default_storage_file(),
            window_size: default_window_size(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Location of the stopwatch file. Relative paths are taken from the
    /// directory that holds the settings file.
    pub fn storage_path(&self, settings_path: &Path) -> PathBuf {
        let file = Path::new(&self.storage_file);
        if file.is_absolute() {
            return file.to_path_buf();
        }
        let base_dir = settings_path.parent().unwrap_or_else(|| Path::new("."));
        base_dir.join(file)
    }

    pub fn log_path(&self, settings_path: &Path) -> Option<PathBuf> {
        let file = Path::new(self.log_file.as_deref()?);
        if file.is_absolute() {
            return Some(file.to_path_buf());
        }
        let base_dir = settings_path.parent().unwrap_or_else(|| Path::new("."));
        Some(base_dir.join(file))
    }
}
