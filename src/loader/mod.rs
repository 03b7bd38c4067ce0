//! Input file loading.
//!
//! This module is the data-acquisition edge of the pipeline:
//! - Reading the delimited lap table from disk
//! - Validating the required column set once, eagerly
//! - Handing the raw rows to the normalizer

pub mod csv;
pub mod table;

// Re-export main types
pub use self::csv::{load_table, read_raw_table};
pub use self::table::RawLapTable;
