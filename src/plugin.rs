use crate::actions::Action;
use crate::board::Board;
use crate::plugins::{main_clock::MainClockPlugin, stopwatch::StopwatchPlugin};

pub trait Plugin: Send + Sync {
    /// Return actions based on the query string and the current board.
    fn search(&self, query: &str, board: &Board) -> Vec<Action>;
    /// Name of the plugin
    fn name(&self) -> &str;
    /// Short help text shown next to the command list.
    fn description(&self) -> &str;
    /// Query shortcuts offered when the command box is empty.
    fn commands(&self) -> Vec<Action> {
        Vec::new()
    }
}

/// A manager that holds plugins
pub struct PluginManager {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Manager with every built-in plugin registered.
    pub fn with_builtins() -> Self {
        let mut pm = Self::new();
        pm.register(Box::new(StopwatchPlugin));
        pm.register(Box::new(MainClockPlugin));
        pm
    }

    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        tracing::debug!(plugin = plugin.name(), "registered plugin");
        self.plugins.push(plugin);
    }

    pub fn search(&self, query: &str, board: &Board) -> Vec<Action> {
        let mut actions = Vec::new();
        for p in &self.plugins {
            actions.extend(p.search(query, board));
        }
        actions
    }

    pub fn commands(&self) -> Vec<Action> {
        self.plugins.iter().flat_map(|p| p.commands()).collect()
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}
