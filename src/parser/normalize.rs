//! Raw table normalization.
//!
//! Turns the text rows read from disk into typed `LapRecord`s:
//! - lap times go through the lap time parser
//! - lap numbers are numerically coerced, failures become missing
//! - the race display name is backfilled from the raw meeting key when
//!   the input carries no display-name column

use super::schema::{LapRecord, LapTable};
use super::time::parse_lap_time;
use crate::loader::table::RawLapTable;
use crate::utils::config::{
    COL_COMPOUND, COL_DRIVER_NAME, COL_DRIVER_NUMBER, COL_LAP_NUMBER, COL_LAP_TIME,
    COL_MEETING_KEY, COL_MEETING_NAME, COL_SESSION_KEY,
};
use log::debug;

/// Coerce a lap-number cell to a number
///
/// **Public** - shares the normalizer's missing-on-failure policy
pub fn coerce_lap_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Normalize a raw table into typed lap records
///
/// **Public** - main entry point for normalization
///
/// # Arguments
/// * `raw` - Raw table as read from disk
///
/// # Returns
/// The typed, immutable lap table snapshot
///
/// Never fails: malformed cells become missing values, and a column the
/// loader has not validated resolves to empty text rather than panicking.
/// The raw table itself is left untouched.
pub fn normalize(raw: &RawLapTable) -> LapTable {
    // Column indices resolved once per table. The display-name column wins
    // when present; the raw key only stands in when it is absent.
    let race_idx = raw
        .column_index(COL_MEETING_NAME)
        .or_else(|| raw.column_index(COL_MEETING_KEY));
    let number_idx = raw.column_index(COL_DRIVER_NUMBER);
    let name_idx = raw.column_index(COL_DRIVER_NAME);
    let session_idx = raw.column_index(COL_SESSION_KEY);
    let compound_idx = raw.column_index(COL_COMPOUND);
    let lap_number_idx = raw.column_index(COL_LAP_NUMBER);
    let lap_time_idx = raw.column_index(COL_LAP_TIME);

    let mut bad_times = 0usize;
    let mut bad_numbers = 0usize;

    let mut laps = Vec::with_capacity(raw.rows.len());
    for row in &raw.rows {
        let raw_time = cell(row, lap_time_idx);
        let lap_time_seconds = parse_lap_time(raw_time);
        if lap_time_seconds.is_none() && raw_time.is_some_and(|t| !t.trim().is_empty()) {
            bad_times += 1;
        }

        let raw_number = cell(row, lap_number_idx).unwrap_or("");
        let lap_number = coerce_lap_number(raw_number);
        if lap_number.is_none() && !raw_number.trim().is_empty() {
            bad_numbers += 1;
        }

        laps.push(LapRecord {
            meeting_name: cell(row, race_idx).unwrap_or("").to_string(),
            driver_number: cell(row, number_idx).unwrap_or("").trim().to_string(),
            driver_name: cell(row, name_idx).unwrap_or("").to_string(),
            session_key: cell(row, session_idx).unwrap_or("").to_string(),
            compound: cell(row, compound_idx).unwrap_or("").to_string(),
            lap_number,
            lap_time_seconds,
        });
    }

    if bad_times > 0 || bad_numbers > 0 {
        debug!(
            "Normalization absorbed {} malformed lap times and {} malformed lap numbers",
            bad_times, bad_numbers
        );
    }

    LapTable::new(laps)
}

/// Fetch a cell by resolved column index
///
/// **Private** - internal helper for normalize
fn cell(row: &[String], idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| row.get(i)).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_table(headers: &[&str], rows: &[&[&str]]) -> RawLapTable {
        RawLapTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    const HEADERS: &[&str] = &[
        "meeting_name",
        "driver_number",
        "driver_name",
        "session_key",
        "compound",
        "Lap Number",
        "Lap Time",
    ];

    #[test]
    fn test_normalize_parses_both_time_formats() {
        let raw = raw_table(
            HEADERS,
            &[
                &["Monza", "44", "Hamilton", "s1", "SOFT", "1", "1:23.456"],
                &["Monza", "44", "Hamilton", "s1", "SOFT", "2", "83.456"],
            ],
        );

        let table = normalize(&raw);
        assert_eq!(table.laps[0].lap_time_seconds, Some(83.456));
        assert_eq!(table.laps[1].lap_time_seconds, Some(83.456));
        assert_eq!(table.laps[0].lap_number, Some(1.0));
    }

    #[test]
    fn test_normalize_never_fails_on_garbage() {
        let raw = raw_table(
            HEADERS,
            &[&["Monza", "44", "Hamilton", "s1", "SOFT", "not-a-lap", "oops"]],
        );

        let table = normalize(&raw);
        assert_eq!(table.len(), 1);
        assert_eq!(table.laps[0].lap_number, None);
        assert_eq!(table.laps[0].lap_time_seconds, None);
    }

    #[test]
    fn test_backfill_race_from_meeting_key() {
        let raw = raw_table(
            &[
                "meeting_key",
                "driver_number",
                "driver_name",
                "session_key",
                "compound",
                "Lap Number",
                "Lap Time",
            ],
            &[&["1219", "44", "Hamilton", "s1", "SOFT", "1", "90.0"]],
        );

        let table = normalize(&raw);
        assert_eq!(table.laps[0].meeting_name, "1219");
    }

    #[test]
    fn test_display_name_not_overwritten_by_key() {
        let raw = raw_table(
            &[
                "meeting_key",
                "meeting_name",
                "driver_number",
                "driver_name",
                "session_key",
                "compound",
                "Lap Number",
                "Lap Time",
            ],
            &[&["1219", "Monza", "44", "Hamilton", "s1", "SOFT", "1", "90.0"]],
        );

        let table = normalize(&raw);
        assert_eq!(table.laps[0].meeting_name, "Monza");
    }

    #[test]
    fn test_coerce_lap_number() {
        assert_eq!(coerce_lap_number("12"), Some(12.0));
        assert_eq!(coerce_lap_number(" 12.0 "), Some(12.0));
        assert_eq!(coerce_lap_number(""), None);
        assert_eq!(coerce_lap_number("twelve"), None);
    }
}
