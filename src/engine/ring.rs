//! Bout resolution.
//!
//! ## Algorithm
//!
//! Given boxers A (entered first) and B (entered second):
//!
//! 1. `delta = |skill(A) - skill(B)|`
//! 2. `threshold = 1 / (1 + e^(-delta))`
//! 3. Draw `roll` in [0, 1] from the random source
//! 4. `roll < threshold` → A wins, otherwise B wins
//! 5. Record a win for the winner, then a loss for the loser
//! 6. The ring is left empty
//!
//! The threshold always favors A, whichever boxer is actually stronger: only
//! the size of the gap matters, never its sign. At `delta = 0` the threshold
//! is exactly 0.5 and a roll of 0.5 goes to B.
//!
//! ## Failure Policy
//!
//! Fewer than two boxers is a precondition error, raised before any skill
//! computation, draw or store call; the ring is not touched. Once resolution
//! starts the ring is emptied, and it stays empty even if the draw or a stats
//! update fails afterwards.

use tracing::{debug, info};

use crate::engine::skill::{fighting_skill, win_threshold};
use crate::engine::slots::MatchSlots;
use crate::error::RingError;
use crate::random::{check_uniform, RandomSource};
use crate::store::BoxerStore;
use crate::types::{BoutReceipt, Boxer, Outcome};

/// Whether the ring can resolve a bout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingState {
    /// Fewer than two boxers present
    Idle,
    /// Exactly two boxers present
    Ready,
}

/// Result of a resolved bout.
#[derive(Debug, Clone, PartialEq)]
pub struct BoutResult {
    pub winner: Boxer,
    pub loser: Boxer,
    pub winner_skill: f64,
    pub loser_skill: f64,
    /// Logistic threshold the roll was compared against
    pub threshold: f64,
    /// Random draw
    pub roll: f64,
    pub receipt: BoutReceipt,
}

impl BoutResult {
    /// Name of the winner, the externally visible result of a bout
    pub fn winner_name(&self) -> &str {
        self.winner.name()
    }
}

/// One physical ring.
///
/// Holds the boxers for the next bout and resolves it against a store and a
/// random source passed in per call. Independent rings share nothing.
#[derive(Debug, Clone)]
pub struct RingEngine {
    slots: MatchSlots,

    /// Next bout ID (starts at 1)
    next_bout_id: u64,
}

impl Default for RingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RingEngine {
    pub fn new() -> Self {
        Self {
            slots: MatchSlots::new(),
            next_bout_id: 1,
        }
    }

    /// Put a boxer in the ring.
    ///
    /// # Errors
    ///
    /// [`RingError::RingFull`] if two boxers are already in.
    pub fn enter_ring(&mut self, boxer: Boxer) -> Result<(), RingError> {
        self.slots.insert(boxer)
    }

    /// Boxers currently in the ring, in order of entry.
    ///
    /// # Errors
    ///
    /// [`RingError::RingEmpty`] if the ring is empty.
    pub fn get_boxers(&self) -> Result<&[Boxer], RingError> {
        self.slots.participants()
    }

    /// Remove every boxer from the ring. No-op on an empty ring.
    pub fn clear_ring(&mut self) {
        self.slots.clear();
    }

    pub fn state(&self) -> RingState {
        if self.slots.is_full() {
            RingState::Ready
        } else {
            RingState::Idle
        }
    }

    /// Number of bouts resolved so far
    pub fn bouts_resolved(&self) -> u64 {
        self.next_bout_id - 1
    }

    /// Resolve the bout between the two boxers in the ring.
    ///
    /// # Example
    ///
    /// ```
    /// use boxing_ring::engine::RingEngine;
    /// use boxing_ring::random::SeededSource;
    /// use boxing_ring::store::Roster;
    ///
    /// let mut roster = Roster::new();
    /// let a = roster.create_boxer("Boxer 1", 180, 167, 72.0, 30).unwrap();
    /// let b = roster.create_boxer("Boxer 2", 175, 169, 70.0, 28).unwrap();
    ///
    /// let mut ring = RingEngine::new();
    /// ring.enter_ring(roster.get_boxer_by_id(a).unwrap()).unwrap();
    /// ring.enter_ring(roster.get_boxer_by_id(b).unwrap()).unwrap();
    ///
    /// let result = ring.fight(&mut roster, &mut SeededSource::new(7)).unwrap();
    /// assert!(["Boxer 1", "Boxer 2"].contains(&result.winner_name()));
    /// assert!(ring.get_boxers().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - [`RingError::NotEnoughBoxers`] with fewer than two boxers (no side effects)
    /// - [`RingError::Random`] if the draw fails or is outside [0, 1]
    /// - [`RingError::Store`] if either stats update fails
    pub fn fight<S, R>(&mut self, store: &mut S, source: &mut R) -> Result<BoutResult, RingError>
    where
        S: BoxerStore + ?Sized,
        R: RandomSource + ?Sized,
    {
        let (first, second) = self.slots.take_pair().ok_or(RingError::NotEnoughBoxers {
            present: self.slots.len(),
        })?;
        info!("Ring is now cleared");

        let first_skill = fighting_skill(&first);
        let second_skill = fighting_skill(&second);
        debug!(name = first.name(), skill = first_skill, "Calculated skill level");
        debug!(name = second.name(), skill = second_skill, "Calculated skill level");

        let threshold = win_threshold(first_skill - second_skill);

        info!("Generating random number");
        let roll = check_uniform(source.next_uniform()?)?;

        let first_wins = roll < threshold;
        let (winner, loser, winner_skill, loser_skill) = if first_wins {
            (first, second, first_skill, second_skill)
        } else {
            (second, first, second_skill, first_skill)
        };
        info!(
            winner = winner.name(),
            loser = loser.name(),
            roll,
            threshold,
            "{} lost! {} is the winner!",
            loser.name(),
            winner.name()
        );

        store.update_stats(winner.id(), Outcome::Win)?;
        store.update_stats(loser.id(), Outcome::Loss)?;
        info!("Record updated");

        let bout_id = self.next_bout_id;
        self.next_bout_id += 1;
        let receipt = BoutReceipt::new(bout_id, winner.id(), loser.id(), roll, threshold);

        Ok(BoutResult {
            winner,
            loser,
            winner_skill,
            loser_skill,
            threshold,
            roll,
            receipt,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
