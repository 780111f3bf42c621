//! Leaderboard over boxers that have fought at least once.
//!
//! ## Win Percentage
//!
//! Percentages are computed with `rust_decimal` so ranking and rounding do
//! not depend on floating-point behavior: `wins / fights * 100`, rounded to
//! one decimal place for display. Ranking uses the unrounded value.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::store::roster::RosterEntry;
use crate::types::WeightClass;

/// Key the leaderboard is ranked by (descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardSort {
    #[default]
    Wins,
    WinPct,
}

impl FromStr for LeaderboardSort {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" => Ok(LeaderboardSort::WinPct),
            other => Err(StoreError::InvalidSortKey {
                key: other.to_string(),
            }),
        }
    }
}

/// One ranked row.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub name: String,
    pub weight: u32,
    pub height: u32,
    pub reach: f64,
    pub age: u32,
    pub weight_class: WeightClass,
    pub fights: u64,
    pub wins: u64,
    /// Percentage, one decimal place (e.g. `66.7`)
    pub win_pct: Decimal,
}

/// Ranked list of boxers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Rank every entry with `fights > 0`; ties break by ascending id.
    pub(crate) fn build<'a>(
        entries: impl Iterator<Item = &'a RosterEntry>,
        sort: LeaderboardSort,
    ) -> Result<Self, StoreError> {
        let mut ranked = Vec::new();

        for entry in entries.filter(|e| e.stats.fights > 0) {
            let boxer = &entry.boxer;
            let ratio = win_ratio(entry.stats.wins, entry.stats.fights);
            let row = LeaderboardEntry {
                id: boxer.id(),
                name: boxer.name().to_string(),
                weight: boxer.weight(),
                height: boxer.height(),
                reach: boxer.reach(),
                age: boxer.age(),
                weight_class: boxer.weight_class()?,
                fights: entry.stats.fights,
                wins: entry.stats.wins,
                win_pct: percent(ratio),
            };
            ranked.push((ratio, row));
        }

        ranked.sort_by(|(ratio_a, a), (ratio_b, b)| {
            let primary = match sort {
                LeaderboardSort::Wins => b.wins.cmp(&a.wins),
                LeaderboardSort::WinPct => ratio_b.cmp(ratio_a),
            };
            match primary {
                Ordering::Equal => a.id.cmp(&b.id),
                other => other,
            }
        });

        Ok(Self {
            entries: ranked.into_iter().map(|(_, row)| row).collect(),
        })
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn win_ratio(wins: u64, fights: u64) -> Decimal {
    if fights == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(wins) / Decimal::from(fights)
}

/// Ratio as a percentage with exactly one decimal place.
fn percent(ratio: Decimal) -> Decimal {
    let mut pct = (ratio * Decimal::from(100)).round_dp(1);
    pct.rescale(1);
    pct
}
