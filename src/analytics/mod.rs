//! Pure interval analytics over ordered reading sequences.
//!
//! Everything in this module is a deterministic, single-pass computation
//! over an already-materialized in-memory sequence: no I/O, no shared
//! state, safe to invoke concurrently over independent inputs.

pub mod intervals;

pub use intervals::{
    compute_intervals, duration_hours, gap_hours, gap_intervals, hours_above, hours_below,
    overlapping_gap_count, AnalysisError,
};
