use std::path::PathBuf;

use log::LevelFilter;

use crate::logging::LogDestination;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub holder_name: String,
    pub output_filename: PathBuf,
    pub logging: LoggingOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            holder_name: "test".to_string(),
            output_filename: PathBuf::from("output.txt"),
            logging: LoggingOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    pub destination: LogDestination,
    pub level: LevelFilter,
    pub file: PathBuf,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            destination: LogDestination::Terminal,
            level: LevelFilter::Info,
            file: PathBuf::from("./tally.log"),
        }
    }
}

impl LoggingOptions {
    /// The configured level, never quieter than `Error`.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.max(LevelFilter::Error)
    }
}
