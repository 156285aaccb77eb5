use std::fs;
use std::path::Path;

use tally_core::{parse_record_line, RecordData, RecordHolder};
use tally_logging::tally_info;

use crate::persist::PersistError;

/// Read a file written by [`crate::save_to_file`] back into a holder named
/// after the file stem. Blank lines are skipped; a later duplicate key
/// overwrites the earlier value.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<RecordHolder, PersistError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(PersistError::io(path))?;

    let mut data = RecordData::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) =
            parse_record_line(line).map_err(|source| PersistError::MalformedLine {
                line_number: index + 1,
                source,
            })?;
        data.insert(key, value);
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    tally_info!("Loaded {} record(s) from {:?}", data.len(), path);
    Ok(RecordHolder::new(name, Some(data)))
}
