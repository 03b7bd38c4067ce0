//! Typed lap records and the analysis report schema.
//!
//! `LapRecord`/`LapTable` are the normalized in-memory representation.
//! `AnalysisReport` defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::summary::CompoundSummary;
use serde::{Deserialize, Serialize};

/// A single normalized lap
///
/// Lap number and lap time are `None` when the source cell was absent or
/// unparseable. The driver number stays text because the raw column mixes
/// numeric and string forms across rows; filtering compares it as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LapRecord {
    /// Race (meeting) display name, backfilled from the raw key if needed
    pub meeting_name: String,

    /// Driver number, as text
    pub driver_number: String,

    /// Driver display name
    pub driver_name: String,

    /// Opaque session identifier
    pub session_key: String,

    /// Tire compound for this lap
    pub compound: String,

    /// Lap number, missing if the cell failed numeric coercion
    pub lap_number: Option<f64>,

    /// Lap time in seconds, missing if the cell failed to parse
    pub lap_time_seconds: Option<f64>,
}

/// Owned immutable snapshot of the normalized lap table
///
/// Loaded once per invocation and handed read-only to every consumer;
/// derived filtered/aggregated views are recomputed per selection.
#[derive(Debug, Clone, Default)]
pub struct LapTable {
    pub laps: Vec<LapRecord>,
}

impl LapTable {
    pub fn new(laps: Vec<LapRecord>) -> Self {
        Self { laps }
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }
}

/// Top-level analysis report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Race (meeting) the report covers
    pub race: String,

    /// Driver number, as text
    pub driver_number: String,

    /// Driver display name
    pub driver_name: String,

    /// Filtered laps for this race/driver selection
    pub laps: Vec<ReportLap>,

    /// Per-compound aggregate summary
    pub summary: Vec<CompoundSummary>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// One lap row in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLap {
    pub lap_number: Option<f64>,
    pub lap_time_seconds: Option<f64>,
    pub compound: String,
    pub session_key: String,
}

impl From<&LapRecord> for ReportLap {
    fn from(lap: &LapRecord) -> Self {
        Self {
            lap_number: lap.lap_number,
            lap_time_seconds: lap.lap_time_seconds,
            compound: lap.compound.clone(),
            session_key: lap.session_key.clone(),
        }
    }
}
