//! In-memory roster of boxers.
//!
//! ## Architecture
//!
//! - **Slab**: Pre-allocated storage for O(1) record operations
//! - **HashMap**: Boxer ID to slab key mapping for O(1) lookup and update
//! - **HashMap**: Boxer name to ID mapping, enforcing unique names
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - Keys are reused after removal
//! - O(1) insert, remove, and lookup
//!
//! Boxer ids are never reused, even though slab keys are.

use std::collections::HashMap;

use slab::Slab;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::store::leaderboard::{Leaderboard, LeaderboardSort};
use crate::store::BoxerStore;
use crate::types::{compute_hash, Boxer, BoxerStats, Outcome, ValidationLimits};

/// One roster slot: the boxer and its fight record.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub boxer: Boxer,
    pub stats: BoxerStats,
}

/// Roster of registered boxers.
#[derive(Debug)]
pub struct Roster {
    /// Key: slab index, Value: RosterEntry
    entries: Slab<RosterEntry>,

    /// Boxer ID to slab key mapping
    id_index: HashMap<u64, usize>,

    /// Boxer name to boxer ID mapping
    name_index: HashMap<String, u64>,

    /// Next boxer ID (ids start at 1)
    next_id: u64,

    /// Bounds applied by `create_boxer`
    limits: ValidationLimits,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create a new empty roster with default limits
    pub fn new() -> Self {
        Self::with_limits(0, ValidationLimits::default())
    }

    /// Create a roster with pre-allocated capacity
    ///
    /// ```
    /// use boxing_ring::store::Roster;
    ///
    /// let roster = Roster::with_capacity(100);
    /// assert!(roster.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_limits(capacity, ValidationLimits::default())
    }

    /// Create a roster with pre-allocated capacity and custom validation limits
    pub fn with_limits(capacity: usize, limits: ValidationLimits) -> Self {
        Self {
            entries: Slab::with_capacity(capacity),
            id_index: HashMap::with_capacity(capacity),
            name_index: HashMap::with_capacity(capacity),
            next_id: 1,
            limits,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Number of registered boxers
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: u64) -> bool {
        self.id_index.contains_key(&id)
    }

    /// Limits applied to new boxers
    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    // ========================================================================
    // Boxer Management
    // ========================================================================

    /// Register a new boxer and return its assigned id.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Invalid`] if any attribute fails validation
    /// - [`StoreError::DuplicateName`] if the name is already registered
    pub fn create_boxer(
        &mut self,
        name: &str,
        weight: u32,
        height: u32,
        reach: f64,
        age: u32,
    ) -> Result<u64, StoreError> {
        let boxer = Boxer::with_limits(0, name, weight, height, reach, age, &self.limits)?;

        if self.name_index.contains_key(boxer.name()) {
            warn!(name, "Boxer with this name already exists");
            return Err(StoreError::DuplicateName {
                name: boxer.name().to_string(),
            });
        }

        let id = self.next_id;
        self.next_id += 1;

        let boxer = boxer.with_id(id);
        self.name_index.insert(boxer.name().to_string(), id);
        let key = self.entries.insert(RosterEntry {
            boxer,
            stats: BoxerStats::new(id),
        });
        self.id_index.insert(id, key);

        info!(id, name, "Created boxer");
        Ok(id)
    }

    /// Remove a boxer and its record.
    pub fn delete_boxer(&mut self, id: u64) -> Result<Boxer, StoreError> {
        let key = self.id_index.remove(&id).ok_or(StoreError::NotFound { id })?;
        let entry = self.entries.remove(key);
        self.name_index.remove(entry.boxer.name());

        info!(id, "Deleted boxer");
        Ok(entry.boxer)
    }

    /// Look up a boxer by id
    pub fn get_boxer_by_id(&self, id: u64) -> Result<Boxer, StoreError> {
        self.entry(id).map(|entry| entry.boxer.clone())
    }

    /// Look up a boxer by exact name
    pub fn get_boxer_by_name(&self, name: &str) -> Result<Boxer, StoreError> {
        let id = self
            .name_index
            .get(name)
            .copied()
            .ok_or_else(|| StoreError::NameNotFound {
                name: name.to_string(),
            })?;
        self.get_boxer_by_id(id)
    }

    /// Current fight record for a boxer
    pub fn stats(&self, id: u64) -> Result<BoxerStats, StoreError> {
        self.entry(id).map(|entry| entry.stats.clone())
    }

    /// Ranked view of every boxer with at least one fight.
    pub fn get_leaderboard(&self, sort: LeaderboardSort) -> Result<Leaderboard, StoreError> {
        let board = Leaderboard::build(self.entries.iter().map(|(_, entry)| entry), sort)?;
        info!(entries = board.len(), ?sort, "Retrieved leaderboard");
        Ok(board)
    }

    /// Iterate over all entries in slab order
    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    // ========================================================================
    // Record Root
    // ========================================================================

    /// SHA-256 over the SSZ encoding of every stats record, in id order.
    ///
    /// Two rosters with the same fight history produce the same root.
    pub fn compute_record_root(&self) -> Result<[u8; 32], StoreError> {
        let mut ids: Vec<u64> = self.id_index.keys().copied().collect();
        ids.sort_unstable();

        let mut buffer = Vec::with_capacity(ids.len() * 24);
        for id in ids {
            let stats = &self.entry(id)?.stats;
            let bytes =
                ssz_rs::serialize(stats).map_err(|e| StoreError::Encoding(e.to_string()))?;
            buffer.extend_from_slice(&bytes);
        }

        Ok(compute_hash(&buffer))
    }

    /// Remove all boxers. Id assignment continues from where it was.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.id_index.clear();
        self.name_index.clear();
    }

    fn entry(&self, id: u64) -> Result<&RosterEntry, StoreError> {
        self.id_index
            .get(&id)
            .and_then(|&key| self.entries.get(key))
            .ok_or(StoreError::NotFound { id })
    }
}

impl BoxerStore for Roster {
    fn update_stats(&mut self, id: u64, outcome: Outcome) -> Result<(), StoreError> {
        let entry = self
            .id_index
            .get(&id)
            .and_then(|&key| self.entries.get_mut(key))
            .ok_or(StoreError::NotFound { id })?;

        entry.stats.record(outcome);
        debug!(
            id,
            ?outcome,
            fights = entry.stats.fights,
            wins = entry.stats.wins,
            "Updated boxer stats"
        );
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxerError;

    fn roster_with_two() -> (Roster, u64, u64) {
        let mut roster = Roster::with_capacity(8);
        let a = roster.create_boxer("Boxer A", 180, 167, 72.0, 30).unwrap();
        let b = roster.create_boxer("Boxer B", 175, 169, 70.0, 28).unwrap();
        (roster, a, b)
    }

    #[test]
    fn test_roster_new() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let (roster, a, b) = roster_with_two();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get_boxer_by_id(a).unwrap().name(), "Boxer A");
        assert_eq!(roster.stats(b).unwrap(), BoxerStats::new(b));
    }

    #[test]
    fn test_create_duplicate_name() {
        let (mut roster, _, _) = roster_with_two();
        let result = roster.create_boxer("Boxer A", 190, 170, 74.0, 31);
        assert_eq!(
            result,
            Err(StoreError::DuplicateName {
                name: "Boxer A".to_string()
            })
        );
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_create_invalid_weight() {
        let mut roster = Roster::new();
        let result = roster.create_boxer("Boxer name", 115, 178, 2.0, 30);
        assert_eq!(
            result,
            Err(StoreError::Invalid(BoxerError::WeightTooLow { weight: 115, min: 125 }))
        );
        assert!(roster.is_empty());
    }

    #[test]
    fn test_delete_boxer() {
        let (mut roster, a, _) = roster_with_two();

        let removed = roster.delete_boxer(a).unwrap();
        assert_eq!(removed.id(), a);
        assert!(!roster.contains(a));
        assert!(roster.get_boxer_by_name("Boxer A").is_err());

        // Name is free again; id is not reused.
        let again = roster.create_boxer("Boxer A", 180, 167, 72.0, 30).unwrap();
        assert_eq!(again, 3);
    }

    #[test]
    fn test_delete_missing() {
        let mut roster = Roster::new();
        assert_eq!(roster.delete_boxer(900800), Err(StoreError::NotFound { id: 900800 }));
    }

    #[test]
    fn test_get_by_name() {
        let (roster, _, b) = roster_with_two();
        assert_eq!(roster.get_boxer_by_name("Boxer B").unwrap().id(), b);
        assert_eq!(
            roster.get_boxer_by_name("900"),
            Err(StoreError::NameNotFound {
                name: "900".to_string()
            })
        );
    }

    #[test]
    fn test_update_stats() {
        let (mut roster, a, b) = roster_with_two();

        roster.update_stats(a, Outcome::Win).unwrap();
        roster.update_stats(b, Outcome::Loss).unwrap();

        let sa = roster.stats(a).unwrap();
        let sb = roster.stats(b).unwrap();
        assert_eq!((sa.fights, sa.wins), (1, 1));
        assert_eq!((sb.fights, sb.wins), (1, 0));
    }

    #[test]
    fn test_update_stats_missing() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.update_stats(42, Outcome::Win),
            Err(StoreError::NotFound { id: 42 })
        );
    }

    #[test]
    fn test_record_root_tracks_history() {
        let (mut left, a, b) = roster_with_two();
        let (mut right, _, _) = roster_with_two();
        assert_eq!(left.compute_record_root(), right.compute_record_root());

        left.update_stats(a, Outcome::Win).unwrap();
        left.update_stats(b, Outcome::Loss).unwrap();
        assert_ne!(left.compute_record_root(), right.compute_record_root());

        right.update_stats(a, Outcome::Win).unwrap();
        right.update_stats(b, Outcome::Loss).unwrap();
        assert_eq!(left.compute_record_root(), right.compute_record_root());
    }

    #[test]
    fn test_clear_keeps_id_sequence() {
        let (mut roster, _, _) = roster_with_two();
        roster.clear();
        assert!(roster.is_empty());
        assert_eq!(roster.create_boxer("Boxer C", 150, 170, 70.0, 25).unwrap(), 3);
    }
}
