//! Interval metrics for an irregularly sampled time series.
//!
//! A sequence of N readings yields exactly N interval durations (the first
//! is zero), so the durations always sum to `last_timestamp -
//! first_timestamp`. All "hours" metrics in the summary report derive from
//! these durations.

use chrono::TimeDelta;
use std::collections::HashSet;

use crate::api::{GapInterval, Interval, ReadingPoint};

/// Errors from the interval calculator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// The input sequence held zero readings. Surfaced to callers as a
    /// "no data" condition, not a crash.
    #[error("no readings to analyze")]
    EmptyInput,

    /// The input sequence was not sorted ascending by timestamp. The
    /// calculator never re-sorts, since silent reordering could mask
    /// upstream data-collection defects.
    #[error(
        "readings out of order at position {position}: {current} precedes {previous}"
    )]
    UnorderedInput {
        position: usize,
        previous: chrono::DateTime<chrono::Utc>,
        current: chrono::DateTime<chrono::Utc>,
    },
}

const SECONDS_PER_HOUR: f64 = 3600.0;

/// A duration as fractional hours. Every "hours" metric in the report
/// goes through this conversion.
pub fn duration_hours(duration: TimeDelta) -> f64 {
    duration.num_seconds() as f64 / SECONDS_PER_HOUR
}

/// Annotate each reading with the span since the one before it.
///
/// The first reading gets a zero duration; equal consecutive timestamps
/// are legal and produce a zero-length interval.
///
/// # Arguments
/// * `readings` - Readings for one location and kind, sorted ascending
///
/// # Returns
/// * `Ok(Vec<Interval>)` - One interval per reading
/// * `Err(AnalysisError::EmptyInput)` - If `readings` is empty
/// * `Err(AnalysisError::UnorderedInput)` - If a timestamp precedes its
///   predecessor
pub fn compute_intervals(readings: &[ReadingPoint]) -> Result<Vec<Interval>, AnalysisError> {
    if readings.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut intervals = Vec::with_capacity(readings.len());
    intervals.push(Interval {
        timestamp: readings[0].timestamp,
        value: readings[0].value,
        duration: TimeDelta::zero(),
    });

    for (i, pair) in readings.windows(2).enumerate() {
        let (prev, cur) = (pair[0], pair[1]);
        if cur.timestamp < prev.timestamp {
            return Err(AnalysisError::UnorderedInput {
                position: i + 1,
                previous: prev.timestamp,
                current: cur.timestamp,
            });
        }
        intervals.push(Interval {
            timestamp: cur.timestamp,
            value: cur.value,
            duration: cur.timestamp - prev.timestamp,
        });
    }

    Ok(intervals)
}

/// Hours spent above `upper_bound`.
///
/// Attribution is trailing: an out-of-range reading accrues the interval
/// that ends at it, i.e. the time since the previous reading. This is the
/// domain's reporting convention and is kept as-is.
pub fn hours_above(intervals: &[Interval], upper_bound: f64) -> f64 {
    intervals
        .iter()
        .filter(|i| i.value > upper_bound)
        .map(|i| duration_hours(i.duration))
        .sum()
}

/// Hours spent below `lower_bound`. Trailing attribution, symmetric to
/// [`hours_above`].
pub fn hours_below(intervals: &[Interval], lower_bound: f64) -> f64 {
    intervals
        .iter()
        .filter(|i| i.value < lower_bound)
        .map(|i| duration_hours(i.duration))
        .sum()
}

/// All intervals strictly longer than `gap_threshold`, interpreted as
/// spans where the logger collected no data.
pub fn gap_intervals(intervals: &[Interval], gap_threshold: TimeDelta) -> Vec<GapInterval> {
    intervals
        .iter()
        .filter(|i| i.duration > gap_threshold)
        .map(|i| GapInterval {
            timestamp: i.timestamp,
            duration: i.duration,
        })
        .collect()
}

/// Total hours covered by gap intervals.
pub fn gap_hours(intervals: &[Interval], gap_threshold: TimeDelta) -> f64 {
    gap_intervals(intervals, gap_threshold)
        .iter()
        .map(|g| duration_hours(g.duration))
        .sum()
}

/// Number of timestamps present in both gap-interval sets.
///
/// Matching is by exact timestamp equality, not interval overlap in the
/// general sense: two gaps "overlap" iff they end at the identical
/// timestamp. For co-sampled temperature/humidity channels this counts
/// the outages that hit both series.
pub fn overlapping_gap_count(a: &[GapInterval], b: &[GapInterval]) -> usize {
    let stamps: HashSet<_> = a.iter().map(|g| g.timestamp).collect();
    b.iter().filter(|g| stamps.contains(&g.timestamp)).count()
}

#[cfg(test)]
#[path = "intervals_tests.rs"]
mod intervals_tests;
