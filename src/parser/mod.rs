//! Lap table parsing and schema definitions.
//!
//! This module handles:
//! - Parsing lap time text ("M:SS.sss" or plain seconds)
//! - Normalizing raw text rows into typed lap records
//! - Defining the analysis report schema

pub mod normalize;
pub mod schema;
pub mod time;

// Re-export main types
pub use normalize::{coerce_lap_number, normalize};
pub use schema::{AnalysisReport, LapRecord, LapTable, ReportLap};
pub use time::{format_lap_time, parse_lap_time};
