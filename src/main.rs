//! Laptime Studio CLI
//!
//! A lap time analysis tool for motor-racing telemetry tables.
//! Filters a lap table by race and driver and produces per-compound
//! summaries, JSON reports, and scatter charts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use laptime_studio::commands::{
    display_schema, display_version, execute_analyze, execute_drivers, execute_races,
    validate_args, validate_report_file, AnalyzeArgs,
};

/// Laptime Studio - lap time analysis by race, driver, and compound
#[derive(Parser, Debug)]
#[command(name = "laptime")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the races present in the input file
    Races {
        /// Path to the lap table CSV
        #[arg(short, long, default_value = "laps.csv")]
        input: PathBuf,
    },

    /// List the drivers for one race
    Drivers {
        /// Path to the lap table CSV
        #[arg(short, long, default_value = "laps.csv")]
        input: PathBuf,

        /// Race (meeting) name
        #[arg(short, long)]
        race: String,
    },

    /// Analyze one race and driver selection
    Analyze {
        /// Path to the lap table CSV
        #[arg(short, long, default_value = "laps.csv")]
        input: PathBuf,

        /// Race (meeting) name
        #[arg(short, long)]
        race: String,

        /// Driver, as listed by the drivers command (e.g. "44 - Hamilton")
        #[arg(short, long)]
        driver: String,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Output path for the SVG scatter chart (optional)
        #[arg(short, long)]
        chart: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart width in pixels
        #[arg(long, default_value = "1200")]
        width: usize,

        /// Print the summary table to stdout
        #[arg(long)]
        summary: bool,

        /// Print the filtered rows to stdout
        #[arg(long)]
        raw: bool,

        /// Show lap times clock-style (M:SS.sss)
        #[arg(long)]
        clock: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Races { input } => {
            execute_races(&input)?;
        }

        Commands::Drivers { input, race } => {
            execute_drivers(&input, &race)?;
        }

        Commands::Analyze {
            input,
            race,
            driver,
            output,
            chart,
            title,
            width,
            summary,
            raw,
            clock,
        } => {
            let args = AnalyzeArgs {
                input,
                race,
                driver,
                output_json: output,
                output_svg: chart,
                chart_title: title,
                chart_width: width,
                print_summary: summary,
                print_raw: raw,
                clock,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute analysis
            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
