//! Selection logic over the lap table.
//!
//! Driver identity is matched on the driver number as text, because the
//! raw column mixes numeric and string forms across rows.

use crate::parser::{LapRecord, LapTable};
use crate::utils::config::DRIVER_DISPLAY_SEPARATOR;
use crate::utils::error::FilterError;
use log::debug;
use std::collections::BTreeSet;

/// A driver choice extracted from its display string
///
/// **Public** - constructed by the presenter from the selector value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSelection {
    /// Driver number as text: the substring before the first " - "
    pub number: String,

    /// The original display string, kept for messages
    pub display: String,
}

impl DriverSelection {
    /// Parse a "{number} - {name}" display string
    ///
    /// A string without the separator selects on the whole text.
    pub fn from_display(display: &str) -> Self {
        let number = display
            .split(DRIVER_DISPLAY_SEPARATOR)
            .next()
            .unwrap_or(display)
            .to_string();

        Self {
            number,
            display: display.to_string(),
        }
    }
}

/// List distinct race identifiers, sorted
///
/// **Public** - feeds the race selector
pub fn list_races(table: &LapTable) -> Vec<String> {
    let races: BTreeSet<&str> = table
        .laps
        .iter()
        .map(|lap| lap.meeting_name.as_str())
        .collect();

    races.into_iter().map(str::to_string).collect()
}

/// List distinct "{number} - {name}" driver display strings for a race
///
/// **Public** - feeds the driver selector, dependent on the race selector
///
/// Sorting is lexicographic on the composed string, so "10 - ..." sorts
/// before "2 - ...". That is the selector's observed ordering and it is
/// kept as-is.
pub fn list_drivers(table: &LapTable, race: &str) -> Vec<String> {
    let drivers: BTreeSet<String> = table
        .laps
        .iter()
        .filter(|lap| lap.meeting_name == race)
        .map(|lap| {
            format!(
                "{}{}{}",
                lap.driver_number, DRIVER_DISPLAY_SEPARATOR, lap.driver_name
            )
        })
        .collect();

    drivers.into_iter().collect()
}

/// Select the rows matching a race and driver
///
/// **Public** - main entry point for filtering
///
/// # Arguments
/// * `table` - The normalized lap table
/// * `race` - Race identifier, compared exactly
/// * `selection` - Driver selection from the selector display string
///
/// # Returns
/// The matching rows, never empty
///
/// # Errors
/// * `FilterError::NoMatchingRows` - the selection matches nothing; callers
///   get an explicit error instead of an empty subset they might index into
pub fn filter_laps(
    table: &LapTable,
    race: &str,
    selection: &DriverSelection,
) -> Result<Vec<LapRecord>, FilterError> {
    let rows: Vec<LapRecord> = table
        .laps
        .iter()
        .filter(|lap| lap.meeting_name == race && lap.driver_number == selection.number)
        .cloned()
        .collect();

    debug!(
        "Selection ({}, {}) matched {} rows",
        race,
        selection.number,
        rows.len()
    );

    if rows.is_empty() {
        return Err(FilterError::NoMatchingRows {
            race: race.to_string(),
            driver: selection.display.clone(),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LapRecord;

    fn lap(race: &str, number: &str, name: &str) -> LapRecord {
        LapRecord {
            meeting_name: race.to_string(),
            driver_number: number.to_string(),
            driver_name: name.to_string(),
            session_key: "9001".to_string(),
            compound: "SOFT".to_string(),
            lap_number: Some(1.0),
            lap_time_seconds: Some(90.0),
        }
    }

    #[test]
    fn test_list_races_sorted_distinct() {
        let table = LapTable::new(vec![
            lap("Suzuka", "44", "Hamilton"),
            lap("Monza", "1", "Verstappen"),
            lap("Monza", "44", "Hamilton"),
        ]);

        assert_eq!(list_races(&table), vec!["Monza", "Suzuka"]);
    }

    #[test]
    fn test_list_drivers_scoped_to_race_and_deduplicated() {
        let table = LapTable::new(vec![
            lap("Monza", "44", "Hamilton"),
            lap("Monza", "44", "Hamilton"),
            lap("Monza", "1", "Verstappen"),
            lap("Suzuka", "16", "Leclerc"),
        ]);

        assert_eq!(
            list_drivers(&table, "Monza"),
            vec!["1 - Verstappen", "44 - Hamilton"]
        );
    }

    #[test]
    fn test_driver_sort_is_lexicographic() {
        let table = LapTable::new(vec![
            lap("Monza", "2", "Sainz"),
            lap("Monza", "10", "Gasly"),
        ]);

        // "10" sorts before "2" as text; observed ordering, kept as-is
        assert_eq!(list_drivers(&table, "Monza"), vec!["10 - Gasly", "2 - Sainz"]);
    }

    #[test]
    fn test_selection_from_display() {
        let sel = DriverSelection::from_display("44 - Hamilton");
        assert_eq!(sel.number, "44");

        let bare = DriverSelection::from_display("44");
        assert_eq!(bare.number, "44");
    }

    #[test]
    fn test_filter_matches_race_and_driver() {
        let table = LapTable::new(vec![
            lap("Monza", "44", "Hamilton"),
            lap("Monza", "1", "Verstappen"),
            lap("Suzuka", "44", "Hamilton"),
        ]);

        let rows = filter_laps(
            &table,
            "Monza",
            &DriverSelection::from_display("44 - Hamilton"),
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].meeting_name, "Monza");
        assert_eq!(rows[0].driver_number, "44");
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let table = LapTable::new(vec![lap("Monza", "44", "Hamilton")]);

        let err = filter_laps(
            &table,
            "Monza",
            &DriverSelection::from_display("99 - Nobody"),
        )
        .unwrap_err();

        assert!(matches!(err, FilterError::NoMatchingRows { .. }));
    }
}
