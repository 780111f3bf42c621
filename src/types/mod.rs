//! Core data types for the boxing ring
//!
//! ## Types
//!
//! - [`Boxer`]: a validated competitor (immutable once built)
//! - [`Outcome`]: Win or Loss, as recorded by the roster
//! - [`WeightClass`]: category derived from weight
//! - [`BoxerStats`]: a boxer's fight/win counters
//! - [`BoutReceipt`]: record of one resolved bout
//!
//! `BoxerStats` and `BoutReceipt` implement SSZ serialization so they can be
//! hashed deterministically.

mod boxer;
mod receipt;

pub use boxer::{
    Boxer, BoxerStats, Outcome, ValidationLimits, WeightClass, MAX_AGE, MIN_AGE, MIN_WEIGHT,
};
pub use receipt::{compute_hash, BoutReceipt};
