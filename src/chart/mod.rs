//! Scatter chart generation.
//!
//! This module renders the filtered laps as an SVG scatter chart:
//! lap number on the x-axis, lap time in seconds on the y-axis, one color
//! per tire compound.

pub mod scatter;

// Re-export main types
pub use scatter::{generate_scatter, ChartConfig};
