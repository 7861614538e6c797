//! Repository trait for reading retrieval.
//!
//! The calculator never talks to a database directly; it consumes
//! sequences handed to it by an implementation of [`ReadingRepository`].
//! The trait is the seam where the relational schema, its constraints and
//! connection management live, all of which stay outside this crate.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::api::Reading;

/// Repository trait for reading retrieval.
///
/// # Contract
/// `fetch_readings` returns readings sorted ascending by timestamp. The
/// analytics layer still validates the ordering and fails rather than
/// re-sorting, so a backend that breaks the contract is caught instead of
/// papered over.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// Fetch all readings for a location within a time range (inclusive),
    /// sorted ascending by timestamp.
    ///
    /// # Arguments
    /// * `location` - Location name as recorded by the logger
    /// * `start` - Start of the range
    /// * `end` - End of the range
    ///
    /// # Returns
    /// * `Ok(Vec<Reading>)` - Matching readings, possibly empty
    /// * `Err(RepositoryError)` - If the operation fails
    async fn fetch_readings(
        &self,
        location: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepositoryResult<Vec<Reading>>;

    /// List all known location names.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Location names in lexical order
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_locations(&self) -> RepositoryResult<Vec<String>>;

    /// Check that the backend is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` - Backend healthy
    /// * `Err(RepositoryError)` - If the check fails
    async fn health_check(&self) -> RepositoryResult<bool>;
}
