//! # Boxing Ring
//!
//! Boxer roster and probabilistic head-to-head bout resolution.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Boxer, BoxerStats, BoutReceipt)
//! - **Store**: Roster with slab-based storage and a leaderboard
//! - **Random**: Sources of uniform rolls (seeded stream, random.org)
//! - **Engine**: The ring: slot set, skill scoring, bout resolution
//!
//! ## Bout Flow
//!
//! 1. Load two boxers from the roster
//! 2. Enter them into a [`RingEngine`]
//! 3. [`RingEngine::fight`] scores both, draws a roll, picks a winner
//! 4. The roster records a win and a loss; the ring is left empty

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Boxer, BoxerStats, BoutReceipt
pub mod types;

/// Competitor store: Roster and leaderboard
pub mod store;

/// Randomness sources
pub mod random;

/// Match engine: slot set, skill, bout resolution
pub mod engine;

/// TOML configuration
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::RingConfig;
pub use engine::{BoutResult, RingEngine, RingState};
pub use error::{BoxerError, ConfigError, RandomError, RingError, StoreError};
pub use random::{RandomSource, SeededSource};
pub use store::{BoxerStore, LeaderboardSort, Roster};
pub use types::{BoutReceipt, Boxer, BoxerStats, Outcome, WeightClass};
