//! Tally core: the record holder, item tallies and the record line format.
mod holder;
mod record_line;
mod tally;
mod value;

pub use holder::{RecordData, RecordHolder};
pub use record_line::{parse_record_line, render_record_line, render_records, RecordLineError};
pub use tally::{tally, Tally};
pub use value::RecordValue;
