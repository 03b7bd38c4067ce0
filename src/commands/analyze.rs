//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads and normalizes the lap table
//! 2. Filters it to the selected race and driver
//! 3. Aggregates lap times by compound
//! 4. Generates the scatter chart
//! 5. Writes output files

use crate::chart::{generate_scatter, ChartConfig};
use crate::commands::models::AnalyzeArgs;
use crate::filter::DriverSelection;
use crate::loader::load_table;
use crate::output::{
    render_laps_table, render_summary_table, write_report, write_svg, TimeDisplay,
};
use crate::pipeline::{analyze, to_report, Analysis};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Analyze command arguments
///
/// # Returns
/// Ok if the analysis succeeds, Err with context if any step fails
///
/// # Errors
/// * Input loading errors (missing file, missing required columns)
/// * No rows matching the race/driver selection
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting analysis for {} / {}", args.race, args.driver);
    info!("Input file: {}", args.input.display());

    let table = load_table(&args.input).context("Failed to load lap table")?;
    debug!("Loaded table with {} laps", table.len());

    let selection = DriverSelection::from_display(&args.driver);
    let analysis =
        analyze(&table, &args.race, &selection).context("Failed to analyze selection")?;

    println!(
        "Showing lap times for Driver #{} ({}) at Meeting {}",
        analysis.driver_number, analysis.driver_name, analysis.race
    );

    let svg_content = if args.output_svg.is_some() {
        info!("Generating scatter chart...");
        let config = chart_config(&args, &analysis);
        Some(generate_scatter(&analysis.laps, Some(&config)).context("Failed to generate chart")?)
    } else {
        None
    };

    write_outputs(&args, &analysis, svg_content)?;

    let display = TimeDisplay::new(args.clock);

    if args.print_summary {
        println!("\nLap Time Summary by Compound");
        print!("{}", render_summary_table(&analysis.summary, &display));
    }

    if args.print_raw {
        println!("\nFiltered laps");
        print!("{}", render_laps_table(&analysis.laps, &display));
    }

    info!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Build the chart configuration for this run
///
/// **Private** - internal helper for execute_analyze
///
/// The default title names the resolved driver and race, the same line the
/// chart is about.
fn chart_config(args: &AnalyzeArgs, analysis: &Analysis) -> ChartConfig {
    let title = args.chart_title.clone().unwrap_or_else(|| {
        format!(
            "Lap Times for {} at {}",
            analysis.driver_name, analysis.race
        )
    });

    let mut config = ChartConfig::new().with_title(title);
    config.width = args.chart_width;
    config
}

/// Write output files (JSON report and optional SVG chart)
///
/// **Private** - internal helper for execute_analyze
fn write_outputs(
    args: &AnalyzeArgs,
    analysis: &Analysis,
    svg_content: Option<String>,
) -> Result<()> {
    info!("Writing output files...");

    let report = to_report(analysis);

    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("Report written to: {}", args.output_json.display());

    if let (Some(svg), Some(svg_path)) = (svg_content, &args.output_svg) {
        write_svg(&svg, svg_path).context("Failed to write chart SVG")?;
        info!("Chart written to: {}", svg_path.display());
    }

    Ok(())
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.race.is_empty() {
        anyhow::bail!("Race cannot be empty");
    }

    if args.driver.is_empty() {
        anyhow::bail!("Driver cannot be empty");
    }

    if args.chart_width == 0 {
        anyhow::bail!("Chart width must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_rejects_empty_selection() {
        let args = AnalyzeArgs::default();
        assert!(validate_args(&args).is_err());

        let args = AnalyzeArgs {
            race: "Monza".to_string(),
            driver: "44 - Hamilton".to_string(),
            ..AnalyzeArgs::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_rejects_zero_width() {
        let args = AnalyzeArgs {
            race: "Monza".to_string(),
            driver: "44 - Hamilton".to_string(),
            chart_width: 0,
            ..AnalyzeArgs::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
