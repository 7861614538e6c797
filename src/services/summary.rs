//! Per-location summary assembly.
//!
//! Orchestrates the interval analytics per reading kind and builds one
//! [`LocationSummary`] row per location. Pure over its inputs: calling
//! any of these twice on the same data yields identical rows.

use chrono::{DateTime, Utc};

use crate::analytics::{
    compute_intervals, duration_hours, gap_intervals, hours_above, hours_below,
    overlapping_gap_count, AnalysisError,
};
use crate::api::{
    EvaluationWindow, GapInterval, LocationSummary, MetricBounds, Reading, ReadingKind,
    ReadingPoint, TemperatureUnit,
};
use crate::config::AnalysisConfig;
use crate::db::{ReadingRepository, RepositoryError};

/// Error type for summary operations.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A location's readings, split per kind and ready for the calculator.
///
/// Temperature values are converted to Fahrenheit here, so every bound
/// comparison downstream happens in one unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingsByKind {
    pub temperature: Vec<ReadingPoint>,
    pub humidity: Vec<ReadingPoint>,
}

impl ReadingsByKind {
    /// Split a fetched sequence by kind, preserving order.
    ///
    /// # Arguments
    /// * `readings` - Readings for one location, sorted ascending
    /// * `unit` - Unit the temperature values are stored in
    pub fn partition(readings: &[Reading], unit: TemperatureUnit) -> Self {
        let mut split = Self::default();
        for r in readings {
            match r.kind {
                ReadingKind::Temperature => split
                    .temperature
                    .push(ReadingPoint::new(r.timestamp, unit.to_fahrenheit(r.value))),
                ReadingKind::RelativeHumidity => {
                    split.humidity.push(ReadingPoint::new(r.timestamp, r.value))
                }
            }
        }
        split
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty() && self.humidity.is_empty()
    }
}

/// Threshold/gap metrics for one reading series.
#[derive(Debug, Clone)]
struct SeriesMetrics {
    hours_high: f64,
    hours_low: f64,
    gaps: Vec<GapInterval>,
    gap_hours: f64,
    first: DateTime<Utc>,
    last: DateTime<Utc>,
}

/// Run the interval calculator over one series.
///
/// Returns `None` for an empty series (that kind was not evaluated);
/// ordering violations still fail the whole summary.
fn analyze_series(
    points: &[ReadingPoint],
    bounds: MetricBounds,
    config: &AnalysisConfig,
) -> Result<Option<SeriesMetrics>, AnalysisError> {
    if points.is_empty() {
        return Ok(None);
    }

    let intervals = compute_intervals(points)?;
    let gaps = gap_intervals(&intervals, config.gap_threshold());
    let gap_hours = gaps.iter().map(|g| duration_hours(g.duration)).sum();

    Ok(Some(SeriesMetrics {
        hours_high: hours_above(&intervals, bounds.upper),
        hours_low: hours_below(&intervals, bounds.lower),
        gaps,
        gap_hours,
        first: points[0].timestamp,
        last: points[points.len() - 1].timestamp,
    }))
}

/// Sum the components that were actually evaluated; `None` when none were.
fn sum_available(components: [Option<f64>; 4]) -> Option<f64> {
    let evaluated: Vec<f64> = components.into_iter().flatten().collect();
    if evaluated.is_empty() {
        None
    } else {
        Some(evaluated.iter().sum())
    }
}

/// Assemble one summary row for a location.
///
/// # Arguments
/// * `location` - Location name for the row
/// * `series` - The location's readings, split per kind
/// * `window` - Evaluated time range
/// * `config` - Bounds, gap threshold and unit settings
///
/// # Returns
/// * `Ok(LocationSummary)` - The assembled row; kinds without readings
///   leave their fields unset
/// * `Err(AnalysisError::EmptyInput)` - If the location has no readings
///   at all
/// * `Err(AnalysisError::UnorderedInput)` - If a series is out of order
pub fn build_summary(
    location: &str,
    series: &ReadingsByKind,
    window: EvaluationWindow,
    config: &AnalysisConfig,
) -> Result<LocationSummary, AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let temp = analyze_series(&series.temperature, config.temperature_bounds, config)?;
    let rh = analyze_series(&series.humidity, config.humidity_bounds, config)?;

    // First/last recorded point across both series.
    let firsts = [temp.as_ref().map(|m| m.first), rh.as_ref().map(|m| m.first)];
    let lasts = [temp.as_ref().map(|m| m.last), rh.as_ref().map(|m| m.last)];
    let first_point = firsts.into_iter().flatten().min();
    let last_point = lasts.into_iter().flatten().max();

    // Recorded hours discount the temperature channel's gaps; without a
    // temperature series there is nothing to anchor the recording span.
    let total_hours_recorded = match (&temp, first_point, last_point) {
        (Some(t), Some(first), Some(last)) => Some(duration_hours(last - first) - t.gap_hours),
        _ => None,
    };

    let hours_temp_high = temp.as_ref().map(|m| m.hours_high);
    let hours_temp_low = temp.as_ref().map(|m| m.hours_low);
    let hours_rh_high = rh.as_ref().map(|m| m.hours_high);
    let hours_rh_low = rh.as_ref().map(|m| m.hours_low);

    let total_hours_out =
        sum_available([hours_temp_high, hours_temp_low, hours_rh_high, hours_rh_low]);

    let percent_out = match (total_hours_out, total_hours_recorded) {
        (Some(out), Some(recorded)) if recorded > 0.0 => Some(out / recorded * 100.0),
        _ => None,
    };

    let overlapping_gap_intervals = match (&temp, &rh) {
        (Some(t), Some(r)) => Some(overlapping_gap_count(&t.gaps, &r.gaps)),
        _ => None,
    };

    Ok(LocationSummary {
        location: location.to_string(),
        start_date: window.start,
        end_date: window.end,
        first_point_recorded: first_point,
        last_point_recorded: last_point,
        total_hours_evaluated: window.hours(),
        total_hours_recorded,
        total_hours_out,
        percent_out,
        hours_temp_high,
        hours_temp_low,
        hours_rh_high,
        hours_rh_low,
        hours_no_data: temp.as_ref().map(|m| m.gap_hours),
        overlapping_gap_intervals,
    })
}

/// Fetch and summarize one location.
///
/// A location with no readings in the window yields an unevaluated row
/// rather than an error; ordering violations and repository failures
/// propagate.
pub async fn summarize_location(
    repo: &dyn ReadingRepository,
    location: &str,
    window: EvaluationWindow,
    config: &AnalysisConfig,
) -> Result<LocationSummary, SummaryError> {
    let readings = repo
        .fetch_readings(location, window.start, window.end)
        .await?;
    let series = ReadingsByKind::partition(&readings, config.temperature_unit);

    match build_summary(location, &series, window, config) {
        Ok(row) => Ok(row),
        Err(AnalysisError::EmptyInput) => {
            log::warn!("no readings for location '{}' in evaluated window", location);
            Ok(LocationSummary::unevaluated(location, &window))
        }
        Err(e) => Err(e.into()),
    }
}

/// Summarize a set of locations, one row each, preserving input order.
pub async fn summarize_locations(
    repo: &dyn ReadingRepository,
    locations: &[String],
    window: EvaluationWindow,
    config: &AnalysisConfig,
) -> Result<Vec<LocationSummary>, SummaryError> {
    let mut rows = Vec::with_capacity(locations.len());
    for location in locations {
        rows.push(summarize_location(repo, location, window, config).await?);
    }
    log::debug!("summarized {} locations", rows.len());
    Ok(rows)
}

/// Summarize every location the repository knows about.
pub async fn summarize_all_locations(
    repo: &dyn ReadingRepository,
    window: EvaluationWindow,
    config: &AnalysisConfig,
) -> Result<Vec<LocationSummary>, SummaryError> {
    let locations = repo.list_locations().await?;
    summarize_locations(repo, &locations, window, config).await
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
