//! Match slot set: the (at most two) boxers waiting for the next bout.

use tracing::info;

use crate::error::RingError;
use crate::types::Boxer;

/// Number of boxers a bout needs.
pub const RING_CAPACITY: usize = 2;

/// Ordered holder of zero, one or two boxers.
///
/// Insertion order is significant: the first boxer in is the one the win
/// threshold favors.
#[derive(Debug, Clone, Default)]
pub struct MatchSlots {
    boxers: Vec<Boxer>,
}

impl MatchSlots {
    pub fn new() -> Self {
        Self {
            boxers: Vec::with_capacity(RING_CAPACITY),
        }
    }

    /// Append a boxer.
    ///
    /// # Errors
    ///
    /// [`RingError::RingFull`] if two boxers are already present; the set is
    /// left unchanged.
    pub fn insert(&mut self, boxer: Boxer) -> Result<(), RingError> {
        if self.boxers.len() >= RING_CAPACITY {
            return Err(RingError::RingFull);
        }

        info!(id = boxer.id(), name = boxer.name(), "Boxer added to the ring");
        self.boxers.push(boxer);
        Ok(())
    }

    /// Boxers in insertion order.
    ///
    /// # Errors
    ///
    /// [`RingError::RingEmpty`] if no boxer has entered.
    pub fn participants(&self) -> Result<&[Boxer], RingError> {
        if self.boxers.is_empty() {
            return Err(RingError::RingEmpty);
        }
        Ok(&self.boxers)
    }

    /// Empty the set. Clearing an empty set is a no-op.
    pub fn clear(&mut self) {
        if self.boxers.is_empty() {
            return;
        }
        self.boxers.clear();
        info!("Ring is now cleared");
    }

    /// Move both boxers out, leaving the set empty.
    ///
    /// Returns `None` (and leaves the set untouched) unless exactly two
    /// boxers are present.
    pub(crate) fn take_pair(&mut self) -> Option<(Boxer, Boxer)> {
        if self.boxers.len() != RING_CAPACITY {
            return None;
        }
        let second = self.boxers.pop()?;
        let first = self.boxers.pop()?;
        Some((first, second))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxers.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.boxers.len() == RING_CAPACITY
    }
}
