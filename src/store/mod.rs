//! Competitor store for the boxing ring.
//!
//! ## Components
//!
//! - [`BoxerStore`]: the one operation the ring needs from persistence
//! - [`Roster`]: in-memory store with slab-based storage and id/name indexes
//! - [`Leaderboard`]: ranked view over boxers that have fought
//!
//! ## Example
//!
//! ```
//! use boxing_ring::store::{BoxerStore, Roster};
//! use boxing_ring::types::Outcome;
//!
//! let mut roster = Roster::with_capacity(16);
//! let id = roster.create_boxer("Boxer 1", 180, 167, 72.0, 30).unwrap();
//!
//! roster.update_stats(id, Outcome::Win).unwrap();
//! assert_eq!(roster.stats(id).unwrap().wins, 1);
//! ```

pub mod leaderboard;
pub mod roster;

pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardSort};
pub use roster::Roster;

use crate::error::StoreError;
use crate::types::Outcome;

/// Persistence collaborator consumed by the ring.
///
/// `Win` increments both the fight and win counters, `Loss` only the fight
/// counter. Unknown ids fail with [`StoreError::NotFound`].
pub trait BoxerStore {
    fn update_stats(&mut self, id: u64, outcome: Outcome) -> Result<(), StoreError>;
}

