use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;

/// Occurrence counts per distinct item, ordered by first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tally {
    counts: IndexMap<String, u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `item`, treating an absent key as zero.
    pub fn add(&mut self, item: impl Into<String>) {
        *self.counts.entry(item.into()).or_insert(0) += 1;
    }

    pub fn get(&self, item: &str) -> Option<u64> {
        self.counts.get(item).copied()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the tallied sequence.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Index<&str> for Tally {
    type Output = u64;

    fn index(&self, item: &str) -> &u64 {
        &self.counts[item]
    }
}

impl<S: Into<String>> FromIterator<S> for Tally {
    fn from_iter<I: IntoIterator<Item = S>>(items: I) -> Self {
        let mut tally = Tally::new();
        for item in items {
            tally.add(item);
        }
        tally
    }
}

/// Renders as `{"apple": 2, "banana": 1}`.
impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (item, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item:?}: {count}")?;
        }
        f.write_str("}")
    }
}

/// Count the occurrences of each distinct item in `items`.
pub fn tally<I, S>(items: I) -> Tally
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().collect()
}
