pub mod main_clock;
pub mod stopwatch;
