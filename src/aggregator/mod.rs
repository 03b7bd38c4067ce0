//! Aggregation of filtered laps into per-compound summaries.
//!
//! This module transforms a filtered row subset into:
//! - One summary row per tire compound
//! - Count, best, average, and worst lap time per compound

pub mod summary;

// Re-export main types and functions
pub use summary::{round_time, summarize_by_compound, CompoundSummary};
