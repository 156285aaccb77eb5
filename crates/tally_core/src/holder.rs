use indexmap::IndexMap;

use crate::record_line::render_records;
use crate::tally::{tally, Tally};
use crate::value::RecordValue;

/// Key/value data held by a [`RecordHolder`], in insertion order.
pub type RecordData = IndexMap<String, RecordValue>;

/// A named mapping of records that can tally items and be persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordHolder {
    pub name: String,
    pub data: RecordData,
}

impl RecordHolder {
    /// Create a holder; missing data becomes an empty mapping.
    pub fn new(name: impl Into<String>, data: Option<RecordData>) -> Self {
        Self {
            name: name.into(),
            data: data.unwrap_or_default(),
        }
    }

    pub fn with_entries<K, V>(
        name: impl Into<String>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<RecordValue>,
    {
        let data = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(name, Some(data))
    }

    /// Count the items in `items`. The result is independent of `self.data`.
    pub fn tally<I, S>(&self, items: I) -> Tally
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tally(items)
    }

    /// The persisted text form of `data`: one `key: value` line per entry.
    pub fn to_records(&self) -> String {
        render_records(&self.data)
    }
}
