//! # envreport
//!
//! Per-location summary reports over environmental sensor readings.
//!
//! This crate evaluates temperature and relative-humidity logging data for a
//! set of monitored locations and produces one summary row per location:
//! hours spent outside the configured bounds, hours lost to gaps in data
//! collection, and the derived date ranges of the evaluation.
//!
//! ## Features
//!
//! - **Interval analytics**: Single-pass threshold/gap/duration computation
//!   over an irregularly sampled time series
//! - **Summary reports**: Per-location aggregate rows with CSV and JSON
//!   rendering
//! - **Repository pattern**: Reading retrieval behind an async trait, with an
//!   in-memory backend for testing and local development
//! - **Explicit units**: The stored temperature unit is configuration, not
//!   inferred from a type code
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects shared across layers
//! - [`analytics`]: Pure interval metrics over ordered reading sequences
//! - [`services`]: High-level orchestration and report rendering
//! - [`db`]: Repository trait, implementations, and factory
//! - [`config`]: Analysis thresholds and bounds loaded from TOML

pub mod analytics;
pub mod api;
pub mod config;
pub mod db;
pub mod services;
