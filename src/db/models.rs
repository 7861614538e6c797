//! Shared data models re-exported for database layer consumers.

pub use crate::api::{Reading, ReadingKind};

/// Raw reading row as a logger backend would deliver it, before the type
/// code is resolved to a [`ReadingKind`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReadingRecord {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub value: f64,
    pub reading_type: i16,
    pub location: String,
}

impl ReadingRecord {
    /// Resolve the type code. Rows with unknown codes yield `None` and
    /// are skipped (and logged) by callers.
    pub fn into_reading(self) -> Option<Reading> {
        let kind = ReadingKind::from_code(self.reading_type)?;
        Some(Reading {
            timestamp: self.timestamp,
            value: self.value,
            kind,
            location: self.location,
        })
    }
}
