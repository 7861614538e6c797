//! In-memory repository for unit testing and local development.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::BTreeSet;

use crate::api::Reading;
use crate::db::repository::{ErrorContext, ReadingRepository, RepositoryError, RepositoryResult};

/// In-memory implementation of [`ReadingRepository`].
///
/// Stores readings in insertion order and sorts on fetch, mirroring the
/// ORDER BY a SQL backend would apply. Cheap to clone per test, safe to
/// share across tasks.
#[derive(Default)]
pub struct LocalRepository {
    readings: RwLock<Vec<Reading>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a batch of readings.
    pub fn insert_readings(&self, readings: impl IntoIterator<Item = Reading>) {
        let mut store = self.readings.write();
        store.extend(readings);
    }

    /// Number of stored readings, across all locations.
    pub fn len(&self) -> usize {
        self.readings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.read().is_empty()
    }
}

#[async_trait]
impl ReadingRepository for LocalRepository {
    async fn fetch_readings(
        &self,
        location: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepositoryResult<Vec<Reading>> {
        if start > end {
            return Err(RepositoryError::query_with_context(
                format!("range start {} is after end {}", start, end),
                ErrorContext::new("fetch_readings").with_entity("reading"),
            ));
        }

        let store = self.readings.read();
        let mut matching: Vec<Reading> = store
            .iter()
            .filter(|r| r.location == location && r.timestamp >= start && r.timestamp <= end)
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal timestamps.
        matching.sort_by_key(|r| r.timestamp);

        log::debug!(
            "fetched {} readings for location '{}' in [{}, {}]",
            matching.len(),
            location,
            start,
            end
        );
        Ok(matching)
    }

    async fn list_locations(&self) -> RepositoryResult<Vec<String>> {
        let store = self.readings.read();
        let names: BTreeSet<String> = store.iter().map(|r| r.location.clone()).collect();
        Ok(names.into_iter().collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
