#![deny(missing_docs)]
//! Shared logging utilities for the tally workspace.
//!
//! This crate provides the `tally_*` logging macros used by the library
//! crates and a minimal test initializer for the global logger. Binaries
//! install their own logger; until one is installed the macros are no-ops.

pub use log::LevelFilter;

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! tally_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! tally_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! tally_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! tally_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Default level for tests: debug in debug builds, info in release builds.
pub fn default_test_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        default_test_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
