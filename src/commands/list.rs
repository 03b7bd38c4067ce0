//! Race and driver listing commands.
//!
//! These are the two cascading selectors of the analysis flow, one
//! invocation per interaction: pick a race from `races`, then a driver
//! from `drivers --race`.

use crate::filter::{list_drivers, list_races};
use crate::loader::load_table;
use anyhow::{Context, Result};
use std::path::Path;

/// Execute the races command: print the distinct races, sorted
///
/// **Public** - called from main.rs
pub fn execute_races(input: &Path) -> Result<()> {
    let table = load_table(input).context("Failed to load lap table")?;

    let races = list_races(&table);
    if races.is_empty() {
        println!("No races found in {}", input.display());
        return Ok(());
    }

    for race in races {
        println!("{}", race);
    }

    Ok(())
}

/// Execute the drivers command: print the drivers for one race
///
/// **Public** - called from main.rs
pub fn execute_drivers(input: &Path, race: &str) -> Result<()> {
    let table = load_table(input).context("Failed to load lap table")?;

    let drivers = list_drivers(&table, race);
    if drivers.is_empty() {
        anyhow::bail!("No drivers found for race: {}", race);
    }

    for driver in drivers {
        println!("{}", driver);
    }

    Ok(())
}
