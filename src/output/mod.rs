//! Output writers for analysis data.
//!
//! This module handles writing data to disk and rendering terminal text:
//! - JSON analysis reports
//! - SVG scatter charts
//! - Plain-text summary and lap tables

pub mod json;
pub mod svg;
pub mod table;

// Re-export main functions
pub use json::{read_report, write_report};
pub use svg::write_svg;
pub use table::{render_laps_table, render_summary_table, TimeDisplay};
