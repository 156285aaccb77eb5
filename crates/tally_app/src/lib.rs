//! Demo driver: tallies a fixed list of items and persists a small record set.
pub mod logging;
mod options;
mod run;

pub use options::{LoggingOptions, RunOptions};
pub use run::{demo_holder, run, RunReport, DEMO_ITEMS};
