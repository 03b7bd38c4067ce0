use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the lap table input file
    pub input: PathBuf,

    /// Race (meeting) to analyze
    pub race: String,

    /// Driver selection, as listed by the drivers command ("44 - Hamilton")
    pub driver: String,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Output path for the SVG scatter chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Chart title; defaults to one naming the driver and race
    pub chart_title: Option<String>,

    /// Chart width in pixels
    pub chart_width: usize,

    /// Print the summary table to stdout
    pub print_summary: bool,

    /// Print the filtered rows to stdout
    pub print_raw: bool,

    /// Show lap times clock-style (M:SS.sss)
    pub clock: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("laps.csv"),
            race: String::new(),
            driver: String::new(),
            output_json: PathBuf::from("report.json"),
            output_svg: None,
            chart_title: None,
            chart_width: 1200,
            print_summary: false,
            print_raw: false,
            clock: false,
        }
    }
}
