//! Laptime Studio
//!
//! Race and driver lap time analysis for motor-racing telemetry tables.
//!
//! This crate provides the core implementation for the `laptime` CLI
//! tool: it loads a lap table from a delimited file, filters it by race
//! and driver, aggregates lap times per tire compound, and renders the
//! result as terminal tables, a JSON report, and an SVG scatter chart.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install laptime-studio
//! laptime --help
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod filter;
pub mod loader;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod utils;
