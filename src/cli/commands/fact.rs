//! Fact command implementation.

use crate::cli::Output;
use crate::facts;
use anyhow::Result;

/// Run the fact command.
pub fn run_fact() -> Result<()> {
    Output::header("Fun Food Fact");
    println!("\n{}", facts::random_fact());
    Ok(())
}
