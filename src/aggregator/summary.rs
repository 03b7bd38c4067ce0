//! Per-compound lap time statistics.
//!
//! Missing lap times are excluded from the time aggregates but still count
//! toward the group's row count.

use crate::parser::LapRecord;
use crate::utils::config::SUMMARY_DECIMALS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate lap time statistics for one tire compound
///
/// **Public** - one row of the summary table
///
/// Serialized field labels match the table headers the presenter shows,
/// which is why three of them carry spaces and capitals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundSummary {
    /// Tire compound
    pub compound: String,

    /// Row count for the compound, rows with missing times included
    #[serde(rename = "Laps")]
    pub laps: u64,

    /// Fastest lap time in seconds
    #[serde(rename = "Best Lap")]
    pub best_lap: Option<f64>,

    /// Mean lap time in seconds
    #[serde(rename = "Average")]
    pub average: Option<f64>,

    /// Slowest lap time in seconds
    #[serde(rename = "Worst Lap")]
    pub worst_lap: Option<f64>,
}

/// Group a filtered subset by compound and summarize lap times
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `laps` - Filtered rows for one race/driver selection
///
/// # Returns
/// One summary per distinct compound, sorted by compound name. A group
/// with no usable lap time keeps its raw row count and reports the three
/// time fields as missing.
pub fn summarize_by_compound(laps: &[LapRecord]) -> Vec<CompoundSummary> {
    // compound -> (row count, usable times)
    let mut groups: BTreeMap<&str, (u64, Vec<f64>)> = BTreeMap::new();

    for lap in laps {
        let entry = groups.entry(lap.compound.as_str()).or_default();
        entry.0 += 1;
        if let Some(time) = lap.lap_time_seconds {
            entry.1.push(time);
        }
    }

    groups
        .into_iter()
        .map(|(compound, (count, times))| summarize_group(compound, count, &times))
        .collect()
}

/// Summarize one compound group
///
/// **Private** - internal helper for summarize_by_compound
fn summarize_group(compound: &str, count: u64, times: &[f64]) -> CompoundSummary {
    if times.is_empty() {
        return CompoundSummary {
            compound: compound.to_string(),
            laps: count,
            best_lap: None,
            average: None,
            worst_lap: None,
        };
    }

    let best = times.iter().copied().fold(f64::INFINITY, f64::min);
    let worst = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = times.iter().sum::<f64>() / times.len() as f64;

    CompoundSummary {
        compound: compound.to_string(),
        laps: count,
        best_lap: Some(round_time(best)),
        average: Some(round_time(mean)),
        worst_lap: Some(round_time(worst)),
    }
}

/// Round a lap time to the summary precision
///
/// **Public** - shared with the terminal table renderer
///
/// Half-way cases round away from zero (`f64::round` semantics).
pub fn round_time(seconds: f64) -> f64 {
    let factor = 10f64.powi(SUMMARY_DECIMALS as i32);
    (seconds * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lap(compound: &str, time: Option<f64>) -> LapRecord {
        LapRecord {
            meeting_name: "Monza".to_string(),
            driver_number: "44".to_string(),
            driver_name: "Hamilton".to_string(),
            session_key: "9001".to_string(),
            compound: compound.to_string(),
            lap_number: Some(1.0),
            lap_time_seconds: time,
        }
    }

    #[test]
    fn test_summary_per_compound() {
        let laps = vec![
            lap("SOFT", Some(90.1)),
            lap("SOFT", Some(90.3)),
            lap("HARD", Some(91.0)),
        ];

        let summary = summarize_by_compound(&laps);
        assert_eq!(summary.len(), 2);

        // BTreeMap ordering: HARD before SOFT
        let hard = &summary[0];
        assert_eq!(hard.compound, "HARD");
        assert_eq!(hard.laps, 1);
        assert_eq!(hard.best_lap, Some(91.0));
        assert_eq!(hard.average, Some(91.0));
        assert_eq!(hard.worst_lap, Some(91.0));

        let soft = &summary[1];
        assert_eq!(soft.compound, "SOFT");
        assert_eq!(soft.laps, 2);
        assert_eq!(soft.best_lap, Some(90.1));
        assert_eq!(soft.average, Some(90.2));
        assert_eq!(soft.worst_lap, Some(90.3));
    }

    #[test]
    fn test_missing_times_excluded_from_aggregates() {
        let laps = vec![
            lap("SOFT", Some(90.0)),
            lap("SOFT", None),
            lap("SOFT", Some(92.0)),
        ];

        let summary = summarize_by_compound(&laps);
        assert_eq!(summary[0].laps, 3);
        assert_eq!(summary[0].best_lap, Some(90.0));
        assert_eq!(summary[0].average, Some(91.0));
        assert_eq!(summary[0].worst_lap, Some(92.0));
    }

    #[test]
    fn test_all_missing_group_keeps_raw_count() {
        let laps = vec![lap("MEDIUM", None), lap("MEDIUM", None)];

        let summary = summarize_by_compound(&laps);
        assert_eq!(summary[0].laps, 2);
        assert_eq!(summary[0].best_lap, None);
        assert_eq!(summary[0].average, None);
        assert_eq!(summary[0].worst_lap, None);
    }

    #[test]
    fn test_empty_subset_yields_empty_summary() {
        assert!(summarize_by_compound(&[]).is_empty());
    }

    #[test]
    fn test_rounding_is_three_decimals() {
        assert_eq!(round_time(90.12345), 90.123);
        assert_eq!(round_time(90.1236), 90.124);
    }
}
