use crate::clock::millis_between;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "New Stopwatch";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stopwatch {
    pub id: String,
    pub name: String,
    /// Milliseconds accumulated while running.
    #[serde(rename = "time", alias = "accumulatedTime")]
    pub accumulated_ms: u64,
    pub is_running: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_resume: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

fn display_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Ordered list of saved stopwatches.
///
/// Every mutator takes the current instant as an argument and reports whether
/// anything changed. Unknown ids are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    entries: Vec<Stopwatch>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt previously saved entries. Running entries without a resume
    /// point start counting from `now`.
    pub fn from_saved(mut entries: Vec<Stopwatch>, now: DateTime<Utc>) -> Self {
        for sw in &mut entries {
            if sw.is_running && sw.last_resume.is_none() {
                sw.last_resume = Some(now);
            } else if !sw.is_running {
                sw.last_resume = None;
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[Stopwatch] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stopwatch> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn running_count(&self) -> usize {
        self.entries.iter().filter(|s| s.is_running).count()
    }

    pub fn get(&self, id: &str) -> Option<&Stopwatch> {
        self.entries.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Stopwatch> {
        self.entries.iter_mut().find(|s| s.id == id)
    }

    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }

    pub fn create(&mut self, name: &str, now: DateTime<Utc>) -> String {
        let id = self.next_id(now);
        self.entries.push(Stopwatch {
            id: id.clone(),
            name: display_name(name),
            accumulated_ms: 0,
            is_running: false,
            last_resume: None,
            created_at: now,
        });
        id
    }

    pub fn toggle(&mut self, id: &str, now: DateTime<Utc>) -> bool {
        let Some(sw) = self.get_mut(id) else {
            return false;
        };
        if sw.is_running {
            if let Some(since) = sw.last_resume.take() {
                sw.accumulated_ms = sw.accumulated_ms.saturating_add(millis_between(since, now));
            }
            sw.is_running = false;
        } else {
            sw.last_resume = Some(now);
            sw.is_running = true;
        }
        true
    }

    /// Fold the wall-clock time since the previous tick into every running
    /// stopwatch.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let mut changed = false;
        for sw in self.entries.iter_mut().filter(|s| s.is_running) {
            let since = sw.last_resume.unwrap_or(now);
            sw.accumulated_ms = sw.accumulated_ms.saturating_add(millis_between(since, now));
            sw.last_resume = Some(since.max(now));
            changed = true;
        }
        changed
    }

    pub fn reset(&mut self, id: &str) -> bool {
        let Some(sw) = self.get_mut(id) else {
            return false;
        };
        sw.accumulated_ms = 0;
        sw.is_running = false;
        sw.last_resume = None;
        true
    }

    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        let Some(sw) = self.get_mut(id) else {
            return false;
        };
        sw.name = display_name(name);
        true
    }

    /// Overwrite the accumulated time, restarting the resume point of a
    /// running stopwatch.
    pub fn set_time(&mut self, id: &str, ms: u64, now: DateTime<Utc>) -> bool {
        let Some(sw) = self.get_mut(id) else {
            return false;
        };
        sw.accumulated_ms = ms;
        if sw.is_running {
            sw.last_resume = Some(now);
        }
        true
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|s| s.id != id);
        self.entries.len() != before
    }
}
