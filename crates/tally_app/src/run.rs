use std::io::Write;
use std::path::PathBuf;

use tally_core::{RecordHolder, RecordValue, Tally};
use tally_engine::save_to_file;
use tally_logging::{tally_debug, tally_warn};

use crate::options::RunOptions;

/// Items tallied by the demo run.
pub const DEMO_ITEMS: [&str; 4] = ["apple", "banana", "apple", "cherry"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub counts: Tally,
    pub output_path: PathBuf,
    pub saved: bool,
}

/// The holder the demo persists: `count: 42` and `status: active`.
pub fn demo_holder(name: &str) -> RecordHolder {
    RecordHolder::with_entries(
        name,
        [
            ("count", RecordValue::from(42)),
            ("status", RecordValue::from("active")),
        ],
    )
}

/// Tally [`DEMO_ITEMS`], print `Item counts: ...` to `out`, then persist the
/// demo holder to the configured output file.
pub fn run(options: &RunOptions, out: &mut impl Write) -> RunReport {
    let holder = demo_holder(&options.holder_name);

    let counts = holder.tally(DEMO_ITEMS);
    if let Err(err) = writeln!(out, "Item counts: {counts}") {
        tally_warn!("Failed to report item counts: {}", err);
    }

    let saved = save_to_file(&holder, &options.output_filename);
    if saved {
        tally_debug!("Wrote records to {:?}", options.output_filename);
    }

    RunReport {
        counts,
        output_path: options.output_filename.clone(),
        saved,
    }
}
