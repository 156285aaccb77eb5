use std::fmt::Write;

use thiserror::Error;

use crate::holder::RecordData;
use crate::value::RecordValue;

const SEPARATOR: &str = ": ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordLineError {
    #[error("missing \": \" separator in {0:?}")]
    MissingSeparator(String),
}

/// `key: value`, without the trailing newline. No escaping is applied.
pub fn render_record_line(key: &str, value: &RecordValue) -> String {
    format!("{key}{SEPARATOR}{value}")
}

/// One newline-terminated line per entry, in mapping order.
pub fn render_records(data: &RecordData) -> String {
    let mut out = String::new();
    for (key, value) in data {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{key}{SEPARATOR}{value}");
    }
    out
}

/// Split a line at the first `": "` and infer the value type.
pub fn parse_record_line(line: &str) -> Result<(String, RecordValue), RecordLineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (key, raw) = line
        .split_once(SEPARATOR)
        .ok_or_else(|| RecordLineError::MissingSeparator(line.to_string()))?;
    Ok((key.to_string(), RecordValue::infer(raw)))
}
