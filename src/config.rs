//! Configuration for a single filter run
//!
//! Collects the command line options into one structure, validates them and
//! builds the active filter set.

use crate::{
    cli::Args,
    core::{
        Mode, Predicate,
        predicates::{
            is_equal, is_even, is_greater, is_greater_or_equal, is_less, is_less_or_equal,
            is_multiple_of, is_odd, is_prime,
        },
    },
    error::FilterError,
};

/// Main configuration structure
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// How the active filters are combined
    pub mode: Mode,
    /// Filters selected on the command line
    pub filters: FilterOptions,
    /// Positional tokens, converted to numbers at execution time
    pub numbers: Vec<String>,
}

/// Filters selected on the command line
///
/// Parameterized filters are `None` unless given explicitly, so `--eq 0`
/// and a missing `--eq` stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub even: bool,
    pub odd: bool,
    pub prime: bool,
    pub mult: Option<i64>,
    pub gt: Option<i64>,
    pub lt: Option<i64>,
    pub eq: Option<i64>,
    pub ge: Option<i64>,
    pub le: Option<i64>,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, FilterError> {
        let config = Self {
            mode: Mode::from_any_flag(args.any),
            filters: FilterOptions {
                even: args.even,
                odd: args.odd,
                prime: args.prime,
                mult: args.mult,
                gt: args.gt,
                lt: args.lt,
                eq: args.eq,
                ge: args.ge,
                le: args.le,
            },
            numbers: args.numbers.clone(),
        };

        // Usage is printed regardless of option values
        if !config.wants_help() {
            config.validate()?;
        }
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.filters.mult == Some(0) {
            return Err(FilterError::validation("--mult must be non-zero"));
        }

        Ok(())
    }

    /// Whether there is nothing to filter and usage should be shown instead
    pub fn wants_help(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Build the active filter set, in flag order
    pub fn filter_set(&self) -> Vec<Predicate> {
        let f = &self.filters;
        let mut filters = Vec::new();

        if f.even {
            filters.push(Predicate::new("even", is_even));
        }
        if f.odd {
            filters.push(Predicate::new("odd", is_odd));
        }
        if f.prime {
            filters.push(Predicate::new("prime", is_prime));
        }

        let bound: [(&str, Option<i64>, fn(i64, i64) -> bool); 6] = [
            ("mult", f.mult, is_multiple_of),
            ("gt", f.gt, is_greater),
            ("lt", f.lt, is_less),
            ("eq", f.eq, is_equal),
            ("ge", f.ge, is_greater_or_equal),
            ("le", f.le, is_less_or_equal),
        ];
        filters.extend(
            bound
                .into_iter()
                .filter_map(|(name, param, test)| param.map(|p| Predicate::bound(name, test, p))),
        );

        filters
    }
}
