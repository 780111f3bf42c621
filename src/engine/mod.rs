//! Match engine for the boxing ring.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: the slot set is a field of [`RingEngine`], never global
//! 2. **Injected collaborators**: the store and random source are passed per bout
//! 3. **Synchronous execution**: one ring, one caller, one bout at a time
//! 4. **Entry order matters**: the first boxer in is favored by the threshold
//!
//! ## Example
//!
//! ```
//! use boxing_ring::engine::RingEngine;
//! use boxing_ring::random::SeededSource;
//! use boxing_ring::store::Roster;
//!
//! let mut roster = Roster::with_capacity(8);
//! let a = roster.create_boxer("Boxer 1", 180, 167, 72.0, 30).unwrap();
//! let b = roster.create_boxer("Boxer 2", 175, 169, 70.0, 28).unwrap();
//!
//! let mut ring = RingEngine::new();
//! ring.enter_ring(roster.get_boxer_by_id(a).unwrap()).unwrap();
//! ring.enter_ring(roster.get_boxer_by_id(b).unwrap()).unwrap();
//!
//! let result = ring.fight(&mut roster, &mut SeededSource::new(42)).unwrap();
//! assert_eq!(roster.stats(result.winner.id()).unwrap().wins, 1);
//! assert_eq!(roster.stats(result.loser.id()).unwrap().fights, 1);
//! ```

pub mod ring;
pub mod skill;
pub mod slots;

pub use ring::{BoutResult, RingEngine, RingState};
pub use skill::{age_modifier, fighting_skill, win_threshold};
pub use slots::{MatchSlots, RING_CAPACITY};
