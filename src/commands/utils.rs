use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Race: {}", report.race);
    println!(
        "  Driver: #{} ({})",
        report.driver_number, report.driver_name
    );
    println!("  Laps: {}", report.laps.len());
    println!("  Compounds: {}", report.summary.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Laptime Studio Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  race: string             - Race (meeting) name");
        println!("  driver_number: string    - Driver number, as text");
        println!("  driver_name: string      - Driver display name");
        println!("  laps: array              - Filtered laps for the selection");
        println!("    lap_number: number?    - Lap number, null if unparseable");
        println!("    lap_time_seconds: number? - Lap time, null if unparseable");
        println!("    compound: string       - Tire compound");
        println!("    session_key: string    - Session identifier");
        println!("  summary: array           - Per-compound aggregates");
        println!("    compound: string       - Tire compound");
        println!("    Laps: number           - Row count for the compound");
        println!("    Best Lap: number?      - Fastest lap time (seconds)");
        println!("    Average: number?       - Mean lap time (seconds)");
        println!("    Worst Lap: number?     - Slowest lap time (seconds)");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Laptime Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Race and driver lap time analysis for motor-racing telemetry.");
}
