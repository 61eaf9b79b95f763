use crate::clock::{Clock, ReferenceInstant, TimeSource};
use crate::format::{format_duration, parse_duration, HourScale};
use crate::registry::{Registry, Stopwatch};
use crate::storage::StopwatchStore;
use std::sync::Arc;

/// Everything the widget shows: the main display and the saved stopwatches.
///
/// All mutations go through here so that every registry change reaches the
/// store.
pub struct Board {
    time: TimeSource,
    registry: Registry,
    store: Option<StopwatchStore>,
    hour_scale: HourScale,
}

impl Board {
    /// A board that keeps its stopwatches in memory only.
    pub fn new(clock: Arc<dyn Clock>, reference: &ReferenceInstant) -> Self {
        Self {
            time: TimeSource::new(clock, reference),
            registry: Registry::new(),
            store: None,
            hour_scale: HourScale::default(),
        }
    }

    /// A board backed by `store`, loading whatever it already holds.
    pub fn with_store(
        clock: Arc<dyn Clock>,
        reference: &ReferenceInstant,
        store: StopwatchStore,
    ) -> Self {
        let time = TimeSource::new(clock, reference);
        let registry = Registry::from_saved(store.load(), time.now());
        tracing::info!(
            count = registry.len(),
            path = %store.path().display(),
            "stopwatch board ready"
        );
        Self {
            time,
            registry,
            store: Some(store),
            hour_scale: HourScale::default(),
        }
    }

    pub fn set_hour_scale(&mut self, scale: HourScale) {
        self.hour_scale = scale;
    }

    pub fn hour_scale(&self) -> HourScale {
        self.hour_scale
    }

    pub fn time_source(&self) -> &TimeSource {
        &self.time
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn stopwatches(&self) -> &[Stopwatch] {
        self.registry.entries()
    }

    pub fn format(&self, ms: u64) -> String {
        format_duration(ms, self.hour_scale)
    }

    pub fn main_elapsed_ms(&self) -> u64 {
        self.time.elapsed_ms()
    }

    pub fn main_display(&self) -> String {
        self.format(self.main_elapsed_ms())
    }

    pub fn create(&mut self, name: &str) -> String {
        let id = self.registry.create(name, self.time.now());
        tracing::debug!(%id, "stopwatch created");
        self.persist();
        id
    }

    pub fn toggle(&mut self, id: &str) {
        let now = self.time.now();
        if self.registry.toggle(id, now) {
            self.persist();
        }
    }

    pub fn tick(&mut self) {
        let now = self.time.now();
        if self.registry.tick(now) {
            self.persist();
        }
    }

    pub fn reset(&mut self, id: &str) {
        if self.registry.reset(id) {
            self.persist();
        }
    }

    pub fn rename(&mut self, id: &str, name: &str) {
        if self.registry.rename(id, name) {
            self.persist();
        }
    }

    pub fn delete(&mut self, id: &str) {
        if self.registry.delete(id) {
            tracing::debug!(%id, "stopwatch deleted");
            self.persist();
        }
    }

    /// Apply a typed `H:MM:SS` value. Input that does not parse is ignored.
    pub fn set_time_from_input(&mut self, id: &str, input: &str) -> bool {
        let Some(ms) = parse_duration(input) else {
            tracing::debug!(%id, input, "ignoring invalid time input");
            return false;
        };
        let now = self.time.now();
        let changed = self.registry.set_time(id, ms, now);
        if changed {
            self.persist();
        }
        changed
    }

    /// Write the registry to the store, if there is one.
    pub fn persist(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(self.registry.entries()) {
                tracing::error!("failed to save {}: {e}", store.path().display());
            }
        }
    }
}
