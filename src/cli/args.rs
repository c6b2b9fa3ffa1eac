//! Command-line argument parsing

use clap::Parser;

/// filter - A CLI tool for filtering numbers
///
/// Prints the given numbers that pass the selected filters. Every filter must
/// pass unless --any is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "filter", allow_negative_numbers = true)]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Filter even numbers
    #[arg(long)]
    pub even: bool,

    /// Filter odd numbers
    #[arg(long)]
    pub odd: bool,

    /// Filter prime numbers
    #[arg(long)]
    pub prime: bool,

    /// Filter multiples of the given number
    #[arg(long, value_name = "N")]
    pub mult: Option<i64>,

    /// Filter numbers greater than the given number
    #[arg(long, value_name = "N")]
    pub gt: Option<i64>,

    /// Filter numbers less than the given number
    #[arg(long, value_name = "N")]
    pub lt: Option<i64>,

    /// Filter numbers equal to the given number
    #[arg(long, value_name = "N")]
    pub eq: Option<i64>,

    /// Filter numbers greater than or equal to the given number
    #[arg(long, value_name = "N")]
    pub ge: Option<i64>,

    /// Filter numbers less than or equal to the given number
    #[arg(long, value_name = "N")]
    pub le: Option<i64>,

    /// At least one of the filters must be true
    #[arg(long)]
    pub any: bool,

    /// Numbers to filter
    #[arg(value_name = "NUMBERS")]
    pub numbers: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
