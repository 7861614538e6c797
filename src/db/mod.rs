//! Database module for reading retrieval.
//!
//! This module provides abstractions for reading retrieval via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Service Layer (services::summary) - Report Logic       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The handle is created via [`factory::RepositoryFactory`] and passed
//! explicitly into the service layer, scoped per analysis run. The SQL
//! schema, its constraints and connection management live behind a
//! backend implementation and are not specified here.

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod models;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use models::ReadingRecord;
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, ReadingRepository, RepositoryError, RepositoryResult};
