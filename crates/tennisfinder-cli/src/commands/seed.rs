// Rust guideline compliant 2026-10-16

//! Implementation of the `tennisfinder seed` command.

use crate::OutputFormatter;
use anyhow::Result;
use tennisfinder_app::DataContext;

/// Replaces all courts with the demo set owned by the demo court owner.
///
/// # Errors
///
/// Returns an error in the production environment or if the store write fails.
pub fn execute(ctx: &DataContext, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = ctx.seed()?;
    println!("{}", formatter.format_seed(&report));
    Ok(())
}
