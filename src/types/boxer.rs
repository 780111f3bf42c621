//! Boxer types for the roster and the ring.
//!
//! ## Validation
//!
//! A [`Boxer`] can only be built through [`Boxer::new`] (default limits) or
//! [`Boxer::with_limits`], so every value the ring sees already satisfies the
//! weight, height, reach and age constraints. Fields are private; a boxer is
//! immutable once validated.
//!
//! ## SSZ Serialization
//!
//! The mutable part of a roster record, [`BoxerStats`], derives
//! `SimpleSerialize` so the roster can hash its win/loss table
//! deterministically. Basic `u64` fields encode as little-endian bytes.

use ssz_rs::prelude::*;

use crate::error::BoxerError;

/// Lightest weight (pounds) accepted for a boxer by default.
pub const MIN_WEIGHT: u32 = 125;

/// Youngest age accepted by default.
pub const MIN_AGE: u32 = 18;

/// Oldest age accepted by default (inclusive).
pub const MAX_AGE: u32 = 40;

// ============================================================================
// Outcome enum
// ============================================================================

/// Result of a bout from one boxer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}

// ============================================================================
// WeightClass enum
// ============================================================================

/// Weight class derived from a boxer's weight in pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeightClass {
    Featherweight,
    Lightweight,
    Middleweight,
    Heavyweight,
}

impl WeightClass {
    /// Classify a weight.
    ///
    /// | Weight | Class |
    /// |--------|-------|
    /// | >= 203 | Heavyweight |
    /// | >= 166 | Middleweight |
    /// | >= 133 | Lightweight |
    /// | >= 125 | Featherweight |
    ///
    /// ```
    /// use boxing_ring::types::WeightClass;
    ///
    /// assert_eq!(WeightClass::from_weight(180).unwrap(), WeightClass::Middleweight);
    /// assert!(WeightClass::from_weight(120).is_err());
    /// ```
    pub fn from_weight(weight: u32) -> Result<Self, BoxerError> {
        match weight {
            203.. => Ok(WeightClass::Heavyweight),
            166.. => Ok(WeightClass::Middleweight),
            133.. => Ok(WeightClass::Lightweight),
            125.. => Ok(WeightClass::Featherweight),
            _ => Err(BoxerError::NoWeightClass { weight }),
        }
    }

    /// Upper-case label, as shown on the leaderboard
    pub fn label(self) -> &'static str {
        match self {
            WeightClass::Featherweight => "FEATHERWEIGHT",
            WeightClass::Lightweight => "LIGHTWEIGHT",
            WeightClass::Middleweight => "MIDDLEWEIGHT",
            WeightClass::Heavyweight => "HEAVYWEIGHT",
        }
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

// ============================================================================
// ValidationLimits
// ============================================================================

/// Bounds applied when a boxer is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Minimum weight in pounds
    pub min_weight: u32,
    /// Minimum age (inclusive)
    pub min_age: u32,
    /// Maximum age (inclusive)
    pub max_age: u32,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_weight: MIN_WEIGHT,
            min_age: MIN_AGE,
            max_age: MAX_AGE,
        }
    }
}

// ============================================================================
// Boxer struct
// ============================================================================

/// A validated competitor.
///
/// ## Example
///
/// ```
/// use boxing_ring::types::Boxer;
///
/// let boxer = Boxer::new(1, "Boxer 1", 180, 167, 72.0, 30).unwrap();
/// assert_eq!(boxer.name(), "Boxer 1");
/// assert_eq!(boxer.weight(), 180);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Boxer {
    id: u64,
    name: String,
    /// Pounds
    weight: u32,
    /// Inches
    height: u32,
    /// Arm span, inches
    reach: f64,
    age: u32,
}

impl Boxer {
    /// Create a boxer checked against the default [`ValidationLimits`].
    pub fn new(
        id: u64,
        name: impl Into<String>,
        weight: u32,
        height: u32,
        reach: f64,
        age: u32,
    ) -> Result<Self, BoxerError> {
        Self::with_limits(id, name, weight, height, reach, age, &ValidationLimits::default())
    }

    /// Create a boxer checked against custom limits.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, checked in field order:
    /// name, weight, height, reach, age. A weight that clears a lowered
    /// `min_weight` but falls below every weight class is rejected with
    /// [`BoxerError::NoWeightClass`].
    pub fn with_limits(
        id: u64,
        name: impl Into<String>,
        weight: u32,
        height: u32,
        reach: f64,
        age: u32,
        limits: &ValidationLimits,
    ) -> Result<Self, BoxerError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(BoxerError::EmptyName);
        }
        if weight < limits.min_weight {
            return Err(BoxerError::WeightTooLow {
                weight,
                min: limits.min_weight,
            });
        }
        WeightClass::from_weight(weight)?;
        if height == 0 {
            return Err(BoxerError::InvalidHeight { height });
        }
        if !reach.is_finite() || reach <= 0.0 {
            return Err(BoxerError::InvalidReach { reach });
        }
        if age < limits.min_age || age > limits.max_age {
            return Err(BoxerError::AgeOutOfRange {
                age,
                min: limits.min_age,
                max: limits.max_age,
            });
        }

        Ok(Self {
            id,
            name,
            weight,
            height,
            reach,
            age,
        })
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn reach(&self) -> f64 {
        self.reach
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Weight class for this boxer's weight
    pub fn weight_class(&self) -> Result<WeightClass, BoxerError> {
        WeightClass::from_weight(self.weight)
    }

    /// Copy of this boxer under a different id (the roster assigns ids).
    pub(crate) fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }
}

// ============================================================================
// BoxerStats struct
// ============================================================================

/// Fight record kept by the roster for one boxer.
///
/// ## SSZ Layout
///
/// Fixed-size container of three u64 fields: 24 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct BoxerStats {
    /// Boxer this record belongs to
    pub boxer_id: u64,

    /// Bouts fought
    pub fights: u64,

    /// Bouts won
    pub wins: u64,
}

impl BoxerStats {
    /// Fresh record with no bouts
    pub fn new(boxer_id: u64) -> Self {
        Self {
            boxer_id,
            fights: 0,
            wins: 0,
        }
    }

    /// Apply one bout result: a win counts as a fight and a win,
    /// a loss only as a fight.
    pub fn record(&mut self, outcome: Outcome) {
        self.fights += 1;
        if outcome == Outcome::Win {
            self.wins += 1;
        }
    }

    /// Bouts lost
    pub fn losses(&self) -> u64 {
        self.fights.saturating_sub(self.wins)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
