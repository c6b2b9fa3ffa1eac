//! Filter engine
//!
//! Applies a set of unary predicates to a list of numbers, keeping the
//! numbers that satisfy all of them or any of them.

use crate::core::predicates::bind;
use std::fmt;

/// A named unary test over a number
pub struct Predicate {
    name: String,
    test: Box<dyn Fn(i64) -> bool>,
}

impl Predicate {
    /// Create a predicate from a unary test
    pub fn new(name: impl Into<String>, test: impl Fn(i64) -> bool + 'static) -> Self {
        Self {
            name: name.into(),
            test: Box::new(test),
        }
    }

    /// Create a predicate from a two-argument test with its parameter fixed
    pub fn bound(name: impl Into<String>, test: fn(i64, i64) -> bool, param: i64) -> Self {
        Self::new(format!("{}={param}", name.into()), bind(test, param))
    }

    /// Name used in logs, e.g. `even` or `gt=3`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the predicate
    pub fn test(&self, num: i64) -> bool {
        (self.test)(num)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

/// How the predicates of a filter set are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Every predicate must pass
    #[default]
    All,
    /// At least one predicate must pass
    Any,
}

impl Mode {
    #[must_use]
    pub const fn from_any_flag(any: bool) -> Self {
        if any { Self::Any } else { Self::All }
    }

    /// Filter `nums` with this mode
    pub fn apply(self, nums: &[i64], predicates: &[Predicate]) -> Vec<i64> {
        match self {
            Self::All => filter_all(nums, predicates),
            Self::Any => filter_any(nums, predicates),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Any => f.write_str("any"),
        }
    }
}

/// Keep the numbers that pass every predicate, in input order
///
/// An empty predicate set keeps every number.
pub fn filter_all(nums: &[i64], predicates: &[Predicate]) -> Vec<i64> {
    nums.iter()
        .copied()
        .filter(|&num| predicates.iter().all(|p| p.test(num)))
        .collect()
}

/// Keep the numbers that pass at least one predicate, in input order
///
/// An empty predicate set keeps nothing.
pub fn filter_any(nums: &[i64], predicates: &[Predicate]) -> Vec<i64> {
    nums.iter()
        .copied()
        .filter(|&num| predicates.iter().any(|p| p.test(num)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::predicates::{is_even, is_greater, is_less_or_equal, is_prime};
    use std::cell::Cell;
    use std::rc::Rc;

    fn even() -> Predicate {
        Predicate::new("even", is_even)
    }

    fn prime() -> Predicate {
        Predicate::new("prime", is_prime)
    }

    #[test]
    fn test_filter_all() {
        let cases: Vec<(&str, Vec<i64>, Vec<Predicate>, Vec<i64>)> = vec![
            ("empty input", vec![], vec![even()], vec![]),
            ("one filter", vec![1, 2, 3, 4, 5], vec![even()], vec![2, 4]),
            ("two filters", vec![1, 2, 3, 4, 5], vec![even(), prime()], vec![2]),
        ];

        for (description, nums, predicates, want) in cases {
            assert_eq!(filter_all(&nums, &predicates), want, "{description}");
        }
    }

    #[test]
    fn test_filter_any() {
        let cases: Vec<(&str, Vec<i64>, Vec<Predicate>, Vec<i64>)> = vec![
            ("empty input", vec![], vec![even()], vec![]),
            ("one filter", vec![1, 2, 3, 4, 5], vec![even()], vec![2, 4]),
            ("two filters", vec![1, 2, 3, 4, 5], vec![even(), prime()], vec![2, 3, 4, 5]),
        ];

        for (description, nums, predicates, want) in cases {
            assert_eq!(filter_any(&nums, &predicates), want, "{description}");
        }
    }

    #[test]
    fn test_empty_filter_set() {
        let nums = vec![3, -1, 3, 0];
        assert_eq!(filter_all(&nums, &[]), nums);
        assert!(filter_any(&nums, &[]).is_empty());
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let nums = [8, 2, 8, 5, 2];
        assert_eq!(filter_all(&nums, &[even()]), vec![8, 2, 8, 2]);
    }

    #[test]
    fn test_short_circuit() {
        let calls = Rc::new(Cell::new(0));
        let counter = {
            let calls = Rc::clone(&calls);
            Predicate::new("counter", move |_| {
                calls.set(calls.get() + 1);
                true
            })
        };

        let predicates = [even(), counter];
        filter_all(&[1, 3, 5], &predicates);
        assert_eq!(calls.get(), 0, "all mode stops at the first failing predicate");

        filter_any(&[2, 4], &predicates);
        assert_eq!(calls.get(), 0, "any mode stops at the first passing predicate");
    }

    #[test]
    fn test_bound_predicate() {
        let gt = Predicate::bound("gt", is_greater, 3);
        assert_eq!(gt.name(), "gt=3");
        assert_eq!(filter_all(&[1, 3, 4, 9], &[gt]), vec![4, 9]);

        let le = Predicate::bound(String::from("le"), is_less_or_equal, -1);
        assert_eq!(le.name(), "le=-1");
        assert_eq!(filter_all(&[-2, -1, 0], &[le]), vec![-2, -1]);
    }

    #[test]
    fn test_mode_apply() {
        let nums = [1, 2, 3, 4, 5];
        let predicates = [even(), prime()];
        assert_eq!(Mode::from_any_flag(false), Mode::All);
        assert_eq!(Mode::from_any_flag(true).apply(&nums, &predicates), vec![2, 3, 4, 5]);
        assert_eq!(Mode::All.apply(&nums, &predicates), vec![2]);
    }
}
