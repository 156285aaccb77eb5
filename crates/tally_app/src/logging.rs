//! Logger bootstrap for the tally binary.
//!
//! The terminal logger writes bare messages to stderr, so stdout carries only
//! the program's own report. The optional log file gets timestamped records.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::options::LoggingOptions;

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    File,
    Terminal,
    Both,
}

/// Install the global logger described by `options`.
///
/// A log file that cannot be created is reported on stderr and skipped.
pub fn initialize(options: &LoggingOptions) {
    let loggers = build_loggers(options.destination, options.level_filter(), &options.file);
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    log_path: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            terminal_config(),
            TerminalMode::Stderr,
            ColorChoice::Never,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        if let Some(file_logger) = create_file_logger(level, file_config(), log_path) {
            loggers.push(file_logger);
        }
    }
    loggers
}

/// Message text only: no time, level, thread, target or location prefix.
fn terminal_config() -> Config {
    ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_max_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build()
}

fn file_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    log_path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
