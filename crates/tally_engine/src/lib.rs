//! Tally engine: persisting record holders to disk and reading them back.
mod load;
mod persist;

pub use load::load_from_file;
pub use persist::{save_to_file, PersistError, RecordFileWriter};
