//! Race and driver filtering.
//!
//! This module implements the cascading selection semantics:
//! - Distinct races across the table
//! - Distinct drivers within a chosen race
//! - The row subset for a (race, driver) selection

pub mod engine;

// Re-export main types and functions
pub use engine::{filter_laps, list_drivers, list_races, DriverSelection};
