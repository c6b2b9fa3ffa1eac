//! Numeric predicates
//!
//! Pure tests over a single number, plus parameterized tests that are turned
//! into unary ones with [`bind`].

/// Returns true if `num` is even
#[must_use]
pub const fn is_even(num: i64) -> bool {
    num % 2 == 0
}

/// Returns true if `num` is odd
#[must_use]
pub const fn is_odd(num: i64) -> bool {
    num % 2 != 0
}

/// Returns true if `num` is prime
///
/// Anything below 2, negatives included, is not prime. Trial division only
/// visits candidates of the form `6k ± 1`.
#[must_use]
pub const fn is_prime(num: i64) -> bool {
    if num == 2 || num == 3 {
        return true;
    }

    if num < 2 || num % 2 == 0 || num % 3 == 0 {
        return false;
    }

    // i <= num / i keeps i * i <= num without overflowing near i64::MAX
    let mut i = 5;
    while i <= num / i {
        if num % i == 0 || num % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Returns true if `num` is a multiple of `multiple`
///
/// # Panics
///
/// Panics if `multiple` is zero.
#[must_use]
pub const fn is_multiple_of(num: i64, multiple: i64) -> bool {
    num.wrapping_rem(multiple) == 0
}

#[must_use]
pub const fn is_greater(num: i64, other: i64) -> bool {
    num > other
}

#[must_use]
pub const fn is_less(num: i64, other: i64) -> bool {
    num < other
}

#[must_use]
pub const fn is_equal(num: i64, other: i64) -> bool {
    num == other
}

#[must_use]
pub const fn is_greater_or_equal(num: i64, other: i64) -> bool {
    num >= other
}

#[must_use]
pub const fn is_less_or_equal(num: i64, other: i64) -> bool {
    num <= other
}

/// Fix the second argument of a two-argument predicate
pub fn bind(predicate: fn(i64, i64) -> bool, param: i64) -> impl Fn(i64) -> bool {
    move |num| predicate(num, param)
}
