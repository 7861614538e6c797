//! Public API surface for the reporting engine.
//!
//! This file consolidates the DTO types shared by the analytics core, the
//! service layer, and the repository implementations. All types derive
//! Serialize/Deserialize for JSON serialization.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Kind of sensor measurement, parsed from the logger's small-integer
/// reading type code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingKind {
    Temperature,
    RelativeHumidity,
}

impl ReadingKind {
    /// Map a raw reading type code to a kind.
    ///
    /// # Arguments
    /// * `code` - The `reading_type` column value (0 = temperature,
    ///   1 = relative humidity)
    ///
    /// # Returns
    /// * `Some(ReadingKind)` for a known code
    /// * `None` for anything else (callers skip and log)
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Temperature),
            1 => Some(Self::RelativeHumidity),
            _ => None,
        }
    }

    /// The raw type code for this kind.
    pub fn code(&self) -> i16 {
        match self {
            Self::Temperature => 0,
            Self::RelativeHumidity => 1,
        }
    }
}

/// Unit a temperature series is stored in.
///
/// The unit is explicit configuration rather than something inferred from
/// the reading type code, so mixed-unit data sources fail loudly in review
/// instead of silently producing shifted thresholds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a value in this unit to degrees Fahrenheit.
    pub fn to_fahrenheit(&self, value: f64) -> f64 {
        match self {
            Self::Celsius => value * 1.8 + 32.0,
            Self::Fahrenheit => value,
        }
    }
}

/// One timestamped sensor measurement at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub kind: ReadingKind,
    pub location: String,
}

impl Reading {
    pub fn new(
        timestamp: DateTime<Utc>,
        value: f64,
        kind: ReadingKind,
        location: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            value,
            kind,
            location: location.into(),
        }
    }
}

/// A `(timestamp, value)` pair, already filtered to one location and one
/// reading kind. Input element of the interval calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl ReadingPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// A reading annotated with the span since the reading before it.
///
/// Derived, never stored: the first reading of a sequence carries a zero
/// duration, every later one the difference to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub duration: TimeDelta,
}

/// An interval whose duration exceeded the gap threshold, interpreted as
/// missing data rather than a real reading-to-reading span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapInterval {
    pub timestamp: DateTime<Utc>,
    pub duration: TimeDelta,
}

/// The evaluated time range of a report run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EvaluationWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window length in hours.
    pub fn hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }
}

/// Lower/upper acceptance bounds for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBounds {
    pub lower: f64,
    pub upper: f64,
}

impl MetricBounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// Per-location aggregate report row.
///
/// Optional fields distinguish "not evaluated" (no data for that series)
/// from "evaluated, zero hours"; they are never zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub first_point_recorded: Option<DateTime<Utc>>,
    pub last_point_recorded: Option<DateTime<Utc>>,
    pub total_hours_evaluated: f64,
    pub total_hours_recorded: Option<f64>,
    pub total_hours_out: Option<f64>,
    pub percent_out: Option<f64>,
    pub hours_temp_high: Option<f64>,
    pub hours_temp_low: Option<f64>,
    pub hours_rh_high: Option<f64>,
    pub hours_rh_low: Option<f64>,
    pub hours_no_data: Option<f64>,
    pub overlapping_gap_intervals: Option<usize>,
}

impl LocationSummary {
    /// A row for a location that produced no readings in the window:
    /// identity and window fields set, every metric left unset.
    pub fn unevaluated(location: impl Into<String>, window: &EvaluationWindow) -> Self {
        Self {
            location: location.into(),
            start_date: window.start,
            end_date: window.end,
            first_point_recorded: None,
            last_point_recorded: None,
            total_hours_evaluated: window.hours(),
            total_hours_recorded: None,
            total_hours_out: None,
            percent_out: None,
            hours_temp_high: None,
            hours_temp_low: None,
            hours_rh_high: None,
            hours_rh_low: None,
            hours_no_data: None,
            overlapping_gap_intervals: None,
        }
    }

    /// True when no metric on this row was evaluated.
    pub fn is_unevaluated(&self) -> bool {
        self.first_point_recorded.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reading_kind_from_code() {
        assert_eq!(ReadingKind::from_code(0), Some(ReadingKind::Temperature));
        assert_eq!(
            ReadingKind::from_code(1),
            Some(ReadingKind::RelativeHumidity)
        );
        assert_eq!(ReadingKind::from_code(7), None);
        assert_eq!(ReadingKind::from_code(-1), None);
    }

    #[test]
    fn test_reading_kind_code_roundtrip() {
        for kind in [ReadingKind::Temperature, ReadingKind::RelativeHumidity] {
            assert_eq!(ReadingKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(TemperatureUnit::Celsius.to_fahrenheit(0.0), 32.0);
        assert_eq!(TemperatureUnit::Celsius.to_fahrenheit(100.0), 212.0);
        assert!((TemperatureUnit::Celsius.to_fahrenheit(21.0) - 69.8).abs() < 1e-9);
    }

    #[test]
    fn test_fahrenheit_passthrough() {
        assert_eq!(TemperatureUnit::Fahrenheit.to_fahrenheit(70.5), 70.5);
    }

    #[test]
    fn test_evaluation_window_hours() {
        let start = Utc.with_ymd_and_hms(2017, 1, 26, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2017, 3, 28, 0, 0, 0).unwrap();
        let window = EvaluationWindow::new(start, end);
        assert_eq!(window.hours(), 61.0 * 24.0);
    }

    #[test]
    fn test_unevaluated_summary() {
        let start = Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2017, 1, 2, 0, 0, 0).unwrap();
        let row = LocationSummary::unevaluated("ONSITE1", &EvaluationWindow::new(start, end));

        assert!(row.is_unevaluated());
        assert_eq!(row.total_hours_evaluated, 24.0);
        assert_eq!(row.total_hours_recorded, None);
        assert_eq!(row.hours_no_data, None);
    }
}
