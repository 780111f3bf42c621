//! Error types for the roster, the randomness source and the ring.
//!
//! ## Taxonomy
//!
//! - [`BoxerError`]: a boxer's attributes failed validation at the boundary
//! - [`StoreError`]: the roster could not find, create or update a record
//! - [`RandomError`]: the randomness source failed or returned garbage
//! - [`RingError`]: a bout could not be set up or resolved
//! - [`ConfigError`]: the configuration file is unreadable or inconsistent
//!
//! `RingError` separates caller mistakes (precondition violations, nothing
//! was mutated) from collaborator failures (the store or the random source
//! failed mid-bout). See [`RingError::is_precondition`].

use thiserror::Error;

/// Validation failure for a boxer's attributes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxerError {
    #[error("Invalid name: must not be empty")]
    EmptyName,

    #[error("Invalid weight: {weight} (must be at least {min})")]
    WeightTooLow { weight: u32, min: u32 },

    #[error("Invalid height: {height} (must be greater than 0)")]
    InvalidHeight { height: u32 },

    #[error("Invalid reach: {reach} (must be a positive number)")]
    InvalidReach { reach: f64 },

    #[error("Invalid age: {age} (must be between {min} and {max})")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },

    #[error("No weight class for weight {weight}")]
    NoWeightClass { weight: u32 },
}

/// Failure reported by the competitor store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Boxer with ID {id} not found")]
    NotFound { id: u64 },

    #[error("Boxer with name '{name}' not found")]
    NameNotFound { name: String },

    #[error("Boxer with name '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Invalid sort key: '{key}' (expected 'wins' or 'win_pct')")]
    InvalidSortKey { key: String },

    #[error(transparent)]
    Invalid(#[from] BoxerError),

    #[error("Failed to encode stats record: {0}")]
    Encoding(String),
}

/// Failure reported by a randomness source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomError {
    #[error("Random source timed out")]
    Timeout,

    #[error("Random source transport error: {0}")]
    Transport(String),

    #[error("Random source returned HTTP status {code}")]
    Status { code: u16 },

    #[error("Invalid response from random source: '{body}'")]
    InvalidResponse { body: String },

    #[error("Random value {value} is outside [0, 1]")]
    OutOfRange { value: f64 },
}

/// Failure while entering, reading or resolving a bout in the ring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RingError {
    #[error("Ring is full, cannot add more boxers")]
    RingFull,

    #[error("The boxing ring is empty")]
    RingEmpty,

    #[error("There must be two boxers to start a fight (found {present})")]
    NotEnoughBoxers { present: usize },

    #[error("Store update failed: {0}")]
    Store(#[from] StoreError),

    #[error("Random draw failed: {0}")]
    Random(#[from] RandomError),
}

impl RingError {
    /// The caller broke a precondition; nothing was mutated.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            RingError::RingFull | RingError::NotEnoughBoxers { .. }
        )
    }

    /// A collaborator (store or random source) failed during resolution.
    pub fn is_collaborator(&self) -> bool {
        matches!(self, RingError::Store(_) | RingError::Random(_))
    }
}

/// Failure while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {reason}")]
    Invalid { reason: String },
}
