//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Per-cell parse failures (lap times, lap numbers) are deliberately NOT
//! errors: they are absorbed as missing values during normalization.

use thiserror::Error;

/// Errors that can occur while loading the lap table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse input file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column missing from input: {0}")]
    MissingColumn(String),
}

/// Errors that can occur while filtering the lap table
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("No laps found for driver {driver} at {race}")]
    NoMatchingRows { race: String, driver: String },
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No plottable laps (every row is missing a lap number or lap time)")]
    EmptyChart,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
