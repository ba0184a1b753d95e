// src/bin/cli.rs
use color_eyre::eyre::{Result, WrapErr};
use daily_picks::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run().wrap_err("daily picks update failed")?;
    Ok(())
}
