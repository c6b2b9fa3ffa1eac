//! Conversion of positional arguments into numbers

use crate::error::{FilterError, Result};
use tracing::debug;

/// Parse every token as a base-10 integer
///
/// Fails on the first malformed token; no partial list is returned.
pub fn parse_numbers<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i64>> {
    let nums = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            token
                .parse::<i64>()
                .map_err(|e| FilterError::invalid_number(token, e))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} numbers", nums.len());
    Ok(nums)
}
