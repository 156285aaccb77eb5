use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tally_core::{RecordHolder, RecordLineError};
use tally_logging::{tally_debug, tally_error};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line_number}: {source}")]
    MalformedLine {
        line_number: usize,
        #[source]
        source: RecordLineError,
    },
}

impl PersistError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> PersistError + '_ {
        move |source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Writes a holder's records to a fixed path, creating or truncating it.
///
/// Missing parent directories are an error, never created. Symlinks are
/// followed and the file they point to is written.
#[derive(Debug, Clone)]
pub struct RecordFileWriter {
    path: PathBuf,
}

impl RecordFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, holder: &RecordHolder) -> Result<PathBuf, PersistError> {
        self.write_content(&holder.to_records())
            .map_err(PersistError::io(&self.path))?;
        Ok(self.path.clone())
    }

    fn write_content(&self, content: &str) -> io::Result<()> {
        let mut file = File::create(&self.path)?;
        file.write_all(content.as_bytes())?;
        file.flush()
    }
}

/// Persist `holder.data` to `path` as `key: value` lines.
///
/// Every failure is reported as `Error saving file: <cause>` at error level
/// and turned into `false`; nothing propagates to the caller.
pub fn save_to_file(holder: &RecordHolder, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match RecordFileWriter::new(path).write(holder) {
        Ok(written) => {
            tally_debug!(
                "Saved {} record(s) of {:?} to {:?}",
                holder.data.len(),
                holder.name,
                written
            );
            true
        }
        Err(err) => {
            tally_error!("Error saving file: {}", err);
            false
        }
    }
}
