//! Bout receipt: an auditable record of one resolved bout.
//!
//! The receipt captures who won, who lost, and the two numbers that decided
//! it (the random roll and the logistic threshold), so a result can be
//! re-checked later without re-running the draw.

use ssz_rs::prelude::*;
use sha2::{Sha256, Digest};

use crate::error::StoreError;

/// Record of one resolved bout.
///
/// ## Floating-Point Fields
///
/// The roll and threshold are stored as their IEEE-754 bit patterns so the
/// struct stays a fixed-size SSZ container and hashes identically everywhere.
/// Use [`BoutReceipt::roll`] and [`BoutReceipt::threshold`] to read them.
///
/// ## Example
///
/// ```
/// use boxing_ring::types::BoutReceipt;
///
/// let receipt = BoutReceipt::new(
///     1,      // bout_id
///     4,      // winner_id
///     9,      // loser_id
///     0.42,   // roll
///     0.73,   // threshold
/// );
/// assert_eq!(receipt.roll(), 0.42);
/// assert_eq!(receipt.digest_hex().unwrap().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct BoutReceipt {
    /// Bout sequence number within one ring
    pub bout_id: u64,

    /// Boxer credited with the win
    pub winner_id: u64,

    /// Boxer credited with the loss
    pub loser_id: u64,

    /// Random roll, `f64::to_bits`
    pub roll_bits: u64,

    /// Logistic threshold the roll was compared against, `f64::to_bits`
    pub threshold_bits: u64,
}

impl BoutReceipt {
    /// Create a new bout receipt
    pub fn new(bout_id: u64, winner_id: u64, loser_id: u64, roll: f64, threshold: f64) -> Self {
        Self {
            bout_id,
            winner_id,
            loser_id,
            roll_bits: roll.to_bits(),
            threshold_bits: threshold.to_bits(),
        }
    }

    /// Random roll drawn for this bout
    pub fn roll(&self) -> f64 {
        f64::from_bits(self.roll_bits)
    }

    /// Threshold the roll was compared against
    pub fn threshold(&self) -> f64 {
        f64::from_bits(self.threshold_bits)
    }

    /// Whether the first boxer in the ring took the bout (`roll < threshold`)
    pub fn first_corner_won(&self) -> bool {
        self.roll() < self.threshold()
    }

    /// SHA-256 over the SSZ encoding of this receipt
    pub fn digest(&self) -> Result<[u8; 32], StoreError> {
        let bytes =
            ssz_rs::serialize(self).map_err(|e| StoreError::Encoding(e.to_string()))?;
        Ok(compute_hash(&bytes))
    }

    /// Digest as a hex string
    pub fn digest_hex(&self) -> Result<String, StoreError> {
        Ok(hex::encode(self.digest()?))
    }
}

/// Compute SHA-256 hash of the given data
pub fn compute_hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

// ============================================================================
// Unit Tests
// ============================================================================
