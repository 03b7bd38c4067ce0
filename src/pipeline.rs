//! The analysis pipeline: selection in, rows and summary out.
//!
//! One pure function per interaction, invoked by the presenter. There is
//! no hidden reactive state between invocations; the table snapshot is
//! owned by the caller and every derived view is recomputed here.

use crate::aggregator::{summarize_by_compound, CompoundSummary};
use crate::filter::{filter_laps, DriverSelection};
use crate::parser::{AnalysisReport, LapRecord, LapTable, ReportLap};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::FilterError;
use log::debug;

/// The outputs of one (race, driver) analysis
///
/// **Public** - consumed by the presenter and the report writer
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Race the analysis covers
    pub race: String,

    /// Driver number, as text
    pub driver_number: String,

    /// Driver display name, resolved from the first matching row
    pub driver_name: String,

    /// The filtered rows
    pub laps: Vec<LapRecord>,

    /// Per-compound summary of the filtered rows
    pub summary: Vec<CompoundSummary>,
}

/// Run the filter + aggregate pipeline for one selection
///
/// **Public** - main entry point, one call per user interaction
///
/// # Arguments
/// * `table` - The loaded, normalized lap table
/// * `race` - Race identifier from the race selector
/// * `selection` - Driver selection from the driver selector
///
/// # Returns
/// Filtered rows plus their per-compound summary
///
/// # Errors
/// * `FilterError::NoMatchingRows` - nothing matches the selection. The
///   driver name is only read from row 0 after this case is ruled out.
pub fn analyze(
    table: &LapTable,
    race: &str,
    selection: &DriverSelection,
) -> Result<Analysis, FilterError> {
    let laps = filter_laps(table, race, selection)?;

    // filter_laps guarantees at least one row
    let driver_name = laps[0].driver_name.clone();

    let summary = summarize_by_compound(&laps);

    debug!(
        "Analysis for {} / {}: {} laps over {} compounds",
        race,
        selection.number,
        laps.len(),
        summary.len()
    );

    Ok(Analysis {
        race: race.to_string(),
        driver_number: selection.number.clone(),
        driver_name,
        laps,
        summary,
    })
}

/// Convert an analysis to the versioned report format
///
/// **Public** - used by commands to create the final output
pub fn to_report(analysis: &Analysis) -> AnalysisReport {
    use chrono::Utc;

    AnalysisReport {
        version: SCHEMA_VERSION.to_string(),
        race: analysis.race.clone(),
        driver_number: analysis.driver_number.clone(),
        driver_name: analysis.driver_name.clone(),
        laps: analysis.laps.iter().map(ReportLap::from).collect(),
        summary: analysis.summary.clone(),
        generated_at: Utc::now().to_rfc3339(),
    }
}
