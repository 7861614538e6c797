//! Rendering of summary rows.
//!
//! No output format is mandated for the report, so this module provides
//! the two reasonable defaults: a CSV table in the summary's field order
//! and a JSON array via serde. Unevaluated fields render empty in CSV and
//! `null` in JSON.

use std::io::Write;

use crate::api::LocationSummary;

const CSV_HEADER: &[&str] = &[
    "LOCATION",
    "START_DATE",
    "END_DATE",
    "FIRST_POINT_RECORDED",
    "LAST_POINT_RECORDED",
    "TOTAL_HOURS_EVALUATED",
    "TOTAL_HOURS_RECORDED",
    "TOTAL_HOURS_OUT",
    "PERCENT_OUT",
    "HOURS_TEMP_HIGH",
    "HOURS_TEMP_LOW",
    "HOURS_RH_HIGH",
    "HOURS_RH_LOW",
    "HOURS_NO_DATA",
    "OVERLAPPING_GAP_INTERVALS",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn fmt_timestamp(ts: Option<chrono::DateTime<chrono::Utc>>) -> String {
    ts.map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

fn fmt_hours(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_default()
}

fn row_fields(row: &LocationSummary) -> Vec<String> {
    vec![
        row.location.clone(),
        fmt_timestamp(Some(row.start_date)),
        fmt_timestamp(Some(row.end_date)),
        fmt_timestamp(row.first_point_recorded),
        fmt_timestamp(row.last_point_recorded),
        format!("{:.4}", row.total_hours_evaluated),
        fmt_hours(row.total_hours_recorded),
        fmt_hours(row.total_hours_out),
        fmt_hours(row.percent_out),
        fmt_hours(row.hours_temp_high),
        fmt_hours(row.hours_temp_low),
        fmt_hours(row.hours_rh_high),
        fmt_hours(row.hours_rh_low),
        fmt_hours(row.hours_no_data),
        row.overlapping_gap_intervals
            .map(|n| n.to_string())
            .unwrap_or_default(),
    ]
}

/// Write summary rows as CSV to a writer, header included.
pub fn write_csv<W: Write>(writer: &mut W, rows: &[LocationSummary]) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_HEADER)?;
    for row in rows {
        out.write_record(row_fields(row))?;
    }
    out.flush()?;
    Ok(())
}

/// Render summary rows as a CSV table, header included.
pub fn render_csv(rows: &[LocationSummary]) -> csv::Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render summary rows as a pretty-printed JSON array.
pub fn render_json(rows: &[LocationSummary]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EvaluationWindow;
    use chrono::{TimeZone, Utc};

    fn sample_row() -> LocationSummary {
        let start = Utc.with_ymd_and_hms(2017, 1, 26, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2017, 3, 28, 0, 0, 0).unwrap();
        let mut row = LocationSummary::unevaluated("ONSITE1", &EvaluationWindow::new(start, end));
        row.first_point_recorded = Some(Utc.with_ymd_and_hms(2017, 1, 26, 8, 5, 0).unwrap());
        row.last_point_recorded = Some(Utc.with_ymd_and_hms(2017, 3, 27, 23, 55, 0).unwrap());
        row.total_hours_recorded = Some(1400.25);
        row.total_hours_out = Some(12.5);
        row.percent_out = Some(0.8927);
        row.hours_temp_high = Some(7.0);
        row.hours_temp_low = Some(5.5);
        row.hours_rh_high = Some(0.0);
        row.hours_rh_low = Some(0.0);
        row.hours_no_data = Some(3.0);
        row.overlapping_gap_intervals = Some(2);
        row
    }

    fn unevaluated(location: &str) -> LocationSummary {
        let start = Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2017, 1, 2, 0, 0, 0).unwrap();
        LocationSummary::unevaluated(location, &EvaluationWindow::new(start, end))
    }

    #[test]
    fn test_csv_header_order() {
        let rendered = render_csv(&[]).unwrap();
        assert_eq!(
            rendered,
            "LOCATION,START_DATE,END_DATE,FIRST_POINT_RECORDED,LAST_POINT_RECORDED,\
             TOTAL_HOURS_EVALUATED,TOTAL_HOURS_RECORDED,TOTAL_HOURS_OUT,PERCENT_OUT,\
             HOURS_TEMP_HIGH,HOURS_TEMP_LOW,HOURS_RH_HIGH,HOURS_RH_LOW,HOURS_NO_DATA,\
             OVERLAPPING_GAP_INTERVALS\n"
        );
    }

    #[test]
    fn test_csv_row_rendering() {
        let rendered = render_csv(&[sample_row()]).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("ONSITE1,2017-01-26 00:00:00,2017-03-28 00:00:00,"));
        assert!(lines[1].contains(",1400.2500,"));
        assert!(lines[1].ends_with(",2"));
    }

    #[test]
    fn test_csv_unevaluated_fields_render_empty() {
        let rendered = render_csv(&[unevaluated("EMPTY")]).unwrap();
        let data_line = rendered.lines().nth(1).unwrap();
        assert_eq!(
            data_line,
            "EMPTY,2017-01-01 00:00:00,2017-01-02 00:00:00,,,24.0000,,,,,,,,,"
        );
    }

    #[test]
    fn test_csv_quotes_location_with_delimiter() {
        let rendered = render_csv(&[unevaluated("WAREHOUSE, EAST")]).unwrap();
        assert!(rendered.contains("\"WAREHOUSE, EAST\""));
    }

    #[test]
    fn test_csv_quotes_location_with_carriage_return() {
        let rendered = render_csv(&[unevaluated("WAREHOUSE\rEAST")]).unwrap();
        assert!(rendered.contains("\"WAREHOUSE\rEAST\""));
    }

    #[test]
    fn test_csv_quotes_location_with_embedded_quote() {
        let rendered = render_csv(&[unevaluated("THE \"ANNEX\"")]).unwrap();
        assert!(rendered.contains("\"THE \"\"ANNEX\"\"\""));
    }

    #[test]
    fn test_csv_roundtrips_through_reader() {
        let rendered = render_csv(&[sample_row(), unevaluated("WAREHOUSE, EAST")]).unwrap();
        let mut reader = csv::Reader::from_reader(rendered.as_bytes());

        let records: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "ONSITE1");
        assert_eq!(&records[1][0], "WAREHOUSE, EAST");
        assert_eq!(records[0].len(), 15);
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[sample_row()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("LOCATION,"));
    }

    #[test]
    fn test_json_null_for_unevaluated() {
        let rendered = render_json(&[unevaluated("EMPTY")]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed[0]["location"], "EMPTY");
        assert!(parsed[0]["total_hours_recorded"].is_null());
    }
}
