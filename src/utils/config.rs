//! Configuration and constants for the CLI.

/// Current analysis report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Input column names. Matched exactly, case-sensitive - the two
// human-labelled columns really do carry spaces and capitals while the
// telemetry columns are snake_case.
pub const COL_LAP_TIME: &str = "Lap Time";
pub const COL_LAP_NUMBER: &str = "Lap Number";
pub const COL_MEETING_KEY: &str = "meeting_key";
pub const COL_MEETING_NAME: &str = "meeting_name";
pub const COL_DRIVER_NUMBER: &str = "driver_number";
pub const COL_DRIVER_NAME: &str = "driver_name";
pub const COL_COMPOUND: &str = "compound";
pub const COL_SESSION_KEY: &str = "session_key";

/// Columns that must be present in every input file.
/// The race column is special-cased: either `meeting_name` or
/// `meeting_key` satisfies it, so it is validated separately.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_DRIVER_NUMBER,
    COL_DRIVER_NAME,
    COL_COMPOUND,
    COL_LAP_NUMBER,
    COL_LAP_TIME,
    COL_SESSION_KEY,
];

/// Separator between driver number and driver name in display strings
pub const DRIVER_DISPLAY_SEPARATOR: &str = " - ";

/// Lap-number axis tick spacing on the scatter chart
pub const X_TICK_INTERVAL: f64 = 10.0;

/// Decimal places kept on aggregated lap times
pub const SUMMARY_DECIMALS: u32 = 3;
