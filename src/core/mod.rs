//! Core filtering functionality
//!
//! Contains the numeric predicates, the filter engine and the conversion of
//! command-line tokens into numbers.

pub mod filter;
pub mod numbers;
pub mod predicates;

pub use filter::{Mode, Predicate, filter_all, filter_any};
pub use numbers::parse_numbers;
