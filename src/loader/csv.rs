//! CSV reader for the lap table input file.

use super::table::RawLapTable;
use crate::parser::{normalize, LapTable};
use crate::utils::config::{COL_MEETING_KEY, COL_MEETING_NAME, REQUIRED_COLUMNS};
use crate::utils::error::LoadError;
use log::{debug, info};
use std::path::Path;

/// Read the raw lap table from a CSV file
///
/// **Public** - first half of `load_table`, exposed so tests and callers
/// can inspect the pre-normalization table
///
/// # Arguments
/// * `path` - Path to the delimited input file
///
/// # Returns
/// The raw table with its required columns validated
///
/// # Errors
/// * `LoadError::Csv` - unreadable file or malformed delimiter structure
/// * `LoadError::MissingColumn` - a required column is absent
pub fn read_raw_table(path: impl AsRef<Path>) -> Result<RawLapTable, LoadError> {
    let path = path.as_ref();
    info!("Loading lap table from: {}", path.display());

    // Flexible: a short row yields missing cells downstream instead of
    // aborting the whole load
    let mut reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    let raw = RawLapTable { headers, rows };
    validate_columns(&raw)?;

    debug!(
        "Read {} rows, {} columns",
        raw.row_count(),
        raw.headers.len()
    );

    Ok(raw)
}

/// Load and normalize the lap table in one step
///
/// **Public** - main entry point for loading
///
/// # Errors
/// Same as `read_raw_table`; normalization itself never fails.
pub fn load_table(path: impl AsRef<Path>) -> Result<LapTable, LoadError> {
    let raw = read_raw_table(path)?;
    let table = normalize(&raw);

    info!("Loaded {} laps", table.len());

    Ok(table)
}

/// Validate the required column set, eagerly at load time
///
/// **Private** - internal helper for read_raw_table
fn validate_columns(raw: &RawLapTable) -> Result<(), LoadError> {
    for column in REQUIRED_COLUMNS {
        if !raw.has_column(column) {
            return Err(LoadError::MissingColumn((*column).to_string()));
        }
    }

    // The race column is satisfied by either the display name or the raw key
    if !raw.has_column(COL_MEETING_NAME) && !raw.has_column(COL_MEETING_KEY) {
        return Err(LoadError::MissingColumn(COL_MEETING_NAME.to_string()));
    }

    Ok(())
}
