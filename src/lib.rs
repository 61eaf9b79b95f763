pub mod actions;
pub mod board;
pub mod clock;
pub mod common;
pub mod format;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod plugin;
pub mod plugins;
pub mod registry;
pub mod schedule;
pub mod settings;
pub mod storage;
