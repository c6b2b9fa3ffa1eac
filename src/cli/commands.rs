//! Command implementation for the CLI

use crate::{
    cli::Args,
    config::Config,
    core::{Predicate, parse_numbers},
};
use anyhow::Context;
use clap::CommandFactory;
use std::io::{self, Write};
use tracing::{debug, info, instrument};

/// Print usage when there is nothing to filter, otherwise filter and print
#[instrument(skip(config))]
pub fn execute_command(config: &Config) -> anyhow::Result<()> {
    if config.wants_help() {
        debug!("No numbers given, printing usage");
        return print_usage();
    }

    execute_filter_command(config)
}

/// Print the generated usage text to stdout
fn print_usage() -> anyhow::Result<()> {
    Args::command()
        .print_help()
        .context("Failed to print usage")
}

#[instrument(skip(config))]
fn execute_filter_command(config: &Config) -> anyhow::Result<()> {
    let filters = config.filter_set();
    debug!(
        "Active filters ({}): {:?}",
        config.mode,
        filters.iter().map(Predicate::name).collect::<Vec<_>>()
    );

    // Every token is converted before anything is printed
    let nums = parse_numbers(&config.numbers).context("Failed to parse numbers")?;

    let result = config.mode.apply(&nums, &filters);
    info!("{} of {} numbers passed", result.len(), nums.len());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render(&result)).context("Failed to write result")?;
    Ok(())
}

/// Join numbers with single spaces
fn render(nums: &[i64]) -> String {
    nums.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
