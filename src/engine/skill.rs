//! Skill scoring and win threshold.
//!
//! The formula is a fixed heuristic, not a calibrated model:
//!
//! ```text
//! skill = weight * name_length + reach / 10 + age_modifier
//!
//! age_modifier = -1   if age < 25
//!              = -2   if age > 35
//!              =  0   otherwise (25 and 35 included)
//! ```
//!
//! The skill gap feeds a logistic curve, `1 / (1 + e^(-|delta|))`, which is
//! 0.5 for equal boxers and approaches 1 as the gap widens.

use crate::types::Boxer;

/// Penalty for age: -1 under 25, -2 over 35, else 0.
#[inline]
pub fn age_modifier(age: u32) -> f64 {
    if age < 25 {
        -1.0
    } else if age > 35 {
        -2.0
    } else {
        0.0
    }
}

/// Fighting skill of a boxer. Pure and deterministic.
///
/// Name length counts characters, not bytes.
///
/// ```
/// use boxing_ring::engine::fighting_skill;
/// use boxing_ring::types::Boxer;
///
/// let boxer = Boxer::new(1, "Boxer 1", 180, 167, 72.0, 30).unwrap();
/// assert!((fighting_skill(&boxer) - 1267.2).abs() < 1e-9);
/// ```
pub fn fighting_skill(boxer: &Boxer) -> f64 {
    let name_length = boxer.name().chars().count() as f64;
    f64::from(boxer.weight()) * name_length + boxer.reach() / 10.0 + age_modifier(boxer.age())
}

/// Logistic transform of the unsigned skill gap, in [0.5, 1].
#[inline]
pub fn win_threshold(delta: f64) -> f64 {
    1.0 / (1.0 + (-delta.abs()).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxer(name: &str, weight: u32, reach: f64, age: u32) -> Boxer {
        Boxer::new(1, name, weight, 170, reach, age).unwrap()
    }

    #[test]
    fn test_age_modifier_boundaries() {
        assert_eq!(age_modifier(24), -1.0);
        assert_eq!(age_modifier(25), 0.0);
        assert_eq!(age_modifier(30), 0.0);
        assert_eq!(age_modifier(35), 0.0);
        assert_eq!(age_modifier(36), -2.0);
    }

    #[test]
    fn test_skill_formula() {
        let a = boxer("Boxer 1", 180, 72.0, 30);
        let b = boxer("Boxer 2", 175, 70.0, 28);

        assert!((fighting_skill(&a) - 1267.2).abs() < 1e-9);
        assert!((fighting_skill(&b) - 1232.0).abs() < 1e-9);
    }

    #[test]
    fn test_skill_applies_age_modifier() {
        let young = boxer("Kid", 150, 70.0, 24);
        let old = boxer("Vet", 150, 70.0, 36);

        assert!((fighting_skill(&young) - (450.0 + 7.0 - 1.0)).abs() < 1e-9);
        assert!((fighting_skill(&old) - (450.0 + 7.0 - 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_skill_counts_characters() {
        let accented = boxer("José", 150, 70.0, 30);
        assert!((fighting_skill(&accented) - (600.0 + 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_skill_is_deterministic() {
        let a = boxer("Boxer 1", 180, 72.0, 30);
        assert_eq!(fighting_skill(&a).to_bits(), fighting_skill(&a).to_bits());
    }

    #[test]
    fn test_threshold_shape() {
        assert_eq!(win_threshold(0.0), 0.5);
        assert_eq!(win_threshold(2.0), win_threshold(-2.0));
        assert!(win_threshold(1.0) > 0.5 && win_threshold(1.0) < 1.0);
        assert!(win_threshold(35.2) > 0.999_999);
    }
}
