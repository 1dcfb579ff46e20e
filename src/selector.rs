//! Day-indexed reference rotation

use chrono::{Datelike, NaiveDate};

use crate::{Error, Result};

/// Curated rotation used when no other list is configured.
pub const DEFAULT_REFERENCES: [&str; 5] = [
    "Psalm 23:1",
    "Proverbs 3:5-6",
    "Matthew 6:33",
    "Romans 8:28",
    "2 Timothy 1:7",
];

/// A fixed, ordered list of references cycled one per calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    references: Vec<String>,
}

impl Rotation {
    /// Build a rotation. An empty list is rejected.
    pub fn new<I, S>(references: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let references: Vec<String> = references.into_iter().map(Into::into).collect();
        if references.is_empty() {
            return Err(Error::ConfigError("reference rotation is empty".into()));
        }
        Ok(Self { references })
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Pick the reference for `date`: `list[ordinal(date) mod N]`.
    ///
    /// The ordinal counts days from 0001-01-01 (which is day 1), so the same
    /// calendar day always yields the same entry and the rotation has period N.
    pub fn pick(&self, date: NaiveDate) -> &str {
        let n = self.references.len() as i64;
        let idx = ordinal(date).rem_euclid(n) as usize;
        &self.references[idx]
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            references: DEFAULT_REFERENCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Proleptic Gregorian ordinal, 0001-01-01 == 1.
pub fn ordinal(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64
}
