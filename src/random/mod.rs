//! Randomness sources for bout resolution.
//!
//! The ring draws one uniform sample in [0, 1] per bout through the
//! [`RandomSource`] trait. Sources never substitute a value on failure:
//! timeouts and transport errors propagate to the caller.
//!
//! - [`SeededSource`]: reproducible ChaCha8 stream
//! - `RandomOrgSource` (feature `random-org`): true-random draws over HTTP

mod seeded;

#[cfg(feature = "random-org")]
mod random_org;

pub use seeded::SeededSource;

#[cfg(feature = "random-org")]
pub use random_org::RandomOrgSource;

use crate::error::RandomError;

/// One independent uniform sample in [0, 1] per call.
pub trait RandomSource {
    fn next_uniform(&mut self) -> Result<f64, RandomError>;
}

/// Reject NaN and anything outside [0, 1].
pub fn check_uniform(value: f64) -> Result<f64, RandomError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(RandomError::OutOfRange { value })
    }
}

/// Parse a plain-text response body holding a single decimal fraction.
///
/// ```
/// use boxing_ring::random::parse_uniform;
///
/// assert_eq!(parse_uniform("0.42\n").unwrap(), 0.42);
/// assert!(parse_uniform("invalid_response").is_err());
/// ```
pub fn parse_uniform(body: &str) -> Result<f64, RandomError> {
    let trimmed = body.trim();
    let value: f64 = trimmed.parse().map_err(|_| RandomError::InvalidResponse {
        body: trimmed.to_string(),
    })?;
    check_uniform(value)
}
