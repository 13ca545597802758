//! Margin tiers: how decisively one run score leads another.
//!
//! Search compares positions by tier rather than by raw score difference, so
//! a lead of 7 to 2 and a lead of 30 to 10 are worth the same.

use serde::{Deserialize, Serialize};

/// Ratio at or above which a lead is dominant.
pub const DOMINANT_RATIO: f64 = 2.0;
/// Ratio at or above which a lead is moderate.
pub const MODERATE_RATIO: f64 = 1.33;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Tier {
    /// The leader is only a little ahead.
    Slight = 1,
    /// The leader is ahead by at least a third.
    Moderate = 2,
    /// The leader has at least double the trailer's score.
    Dominant = 3,
}

impl Tier {
    /// Classifies the margin of `winner` over `loser`.
    ///
    /// Real-valued division is used and a ratio exactly on a threshold resolves
    /// to the higher tier. Callers only pass distinct scores with `winner > loser`.
    ///
    /// # Example
    ///
    /// ```
    /// use rowmax_evaluator::margin::Tier;
    ///
    /// assert_eq!(Tier::classify(4, 2), Tier::Dominant);
    /// assert_eq!(Tier::classify(4, 3), Tier::Moderate);
    /// assert_eq!(Tier::classify(7, 6), Tier::Slight);
    /// ```
    #[must_use]
    pub fn classify(winner: u32, loser: u32) -> Tier {
        let winner = f64::from(winner);
        let loser = f64::from(loser);
        if winner / DOMINANT_RATIO >= loser {
            Tier::Dominant
        } else if winner / MODERATE_RATIO >= loser {
            Tier::Moderate
        } else {
            Tier::Slight
        }
    }

    /// Returns the tier as a search value (1, 2 or 3).
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_threshold_is_inclusive() {
        assert_eq!(Tier::classify(4, 2), Tier::Dominant);
        assert_eq!(Tier::classify(7, 0), Tier::Dominant);
        assert_eq!(Tier::classify(14, 7), Tier::Dominant);
        assert_eq!(Tier::classify(13, 7), Tier::Moderate);
    }

    #[test]
    fn test_moderate_tier() {
        // 4 / 2 = 2 < 3, 4 / 1.33 ≈ 3.008 >= 3
        assert_eq!(Tier::classify(4, 3), Tier::Moderate);
        // 7 / 1.33 ≈ 5.26 >= 5
        assert_eq!(Tier::classify(7, 5), Tier::Moderate);
    }

    #[test]
    fn test_slight_tier() {
        // 7 / 1.33 ≈ 5.26 < 6
        assert_eq!(Tier::classify(7, 6), Tier::Slight);
        assert_eq!(Tier::classify(12, 10), Tier::Slight);
    }

    #[test]
    fn test_tier_values_are_ordered() {
        assert_eq!(Tier::Slight.value(), 1);
        assert_eq!(Tier::Moderate.value(), 2);
        assert_eq!(Tier::Dominant.value(), 3);
        assert!(Tier::Slight < Tier::Moderate && Tier::Moderate < Tier::Dominant);
    }
}
