//! # Number Filter
//!
//! A command-line tool that filters a list of integers, keeping only those
//! that satisfy a combination of predicates: parity, primality, multiples
//! and comparisons.
//!
//! ## Features
//!
//! - Pure numeric predicates and partial application for parameterized ones
//! - "All must pass" and "any must pass" combination modes
//! - Explicit presence tracking for parameterized filters (`--eq 0`)
//!
//! ## Example
//!
//! ```
//! use numfilter::core::{Mode, Predicate, predicates};
//!
//! let filters = vec![
//!     Predicate::new("even", predicates::is_even),
//!     Predicate::bound("mult", predicates::is_multiple_of, 3),
//! ];
//! assert_eq!(Mode::All.apply(&[1, 2, 3, 4, 5, 6], &filters), vec![6]);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr; stdout only carries results and usage.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
