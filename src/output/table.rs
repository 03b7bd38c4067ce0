//! Plain-text table rendering for the terminal.

use crate::aggregator::CompoundSummary;
use crate::parser::{format_lap_time, LapRecord};

/// Helper for formatting lap times for display
///
/// **Public** - shared by the summary and lap tables
pub struct TimeDisplay {
    pub clock: bool,
}

impl TimeDisplay {
    pub fn new(clock: bool) -> Self {
        Self { clock }
    }

    /// Format an optional lap time; missing values render as "-"
    pub fn format(&self, seconds: Option<f64>) -> String {
        match seconds {
            None => "-".to_string(),
            Some(s) if self.clock => format_lap_time(s),
            Some(s) => format!("{:.3}", s),
        }
    }
}

/// Render the per-compound summary as a fixed-width text table
///
/// **Public** - used by the analyze command's `--summary` output
pub fn render_summary_table(summary: &[CompoundSummary], display: &TimeDisplay) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<14} {:>6} {:>10} {:>10} {:>10}\n",
        "compound", "Laps", "Best Lap", "Average", "Worst Lap"
    ));

    for row in summary {
        out.push_str(&format!(
            "{:<14} {:>6} {:>10} {:>10} {:>10}\n",
            row.compound,
            row.laps,
            display.format(row.best_lap),
            display.format(row.average),
            display.format(row.worst_lap)
        ));
    }

    out
}

/// Render the filtered rows as a fixed-width text table
///
/// **Public** - used by the analyze command's `--raw` output
pub fn render_laps_table(laps: &[LapRecord], display: &TimeDisplay) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>6} {:>10} {:<14} {:<12}\n",
        "Lap", "Lap Time", "compound", "session_key"
    ));

    for lap in laps {
        let lap_number = match lap.lap_number {
            Some(n) => format!("{}", n),
            None => "-".to_string(),
        };

        out.push_str(&format!(
            "{:>6} {:>10} {:<14} {:<12}\n",
            lap_number,
            display.format(lap.lap_time_seconds),
            lap.compound,
            lap.session_key
        ));
    }

    out
}
