//! Campaign-wide totals shown on the home page.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

/// Snapshot of how far the campaign is from its goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub goal: Decimal,
    pub total_raised: Decimal,
    pub donor_count: usize,
    /// `goal - total_raised`, never below zero.
    pub remaining: Decimal,
    /// Whole percent reached, 0 to 100.
    pub progress_percent: u8,
}

impl CampaignSummary {
    /// Aggregate accepted donation amounts against `goal`.
    pub fn compute(goal: Decimal, amounts: impl IntoIterator<Item = Decimal>) -> Self {
        let (total_raised, donor_count) = amounts
            .into_iter()
            .fold((Decimal::ZERO, 0usize), |(sum, n), amount| (sum + amount, n + 1));

        let remaining = (goal - total_raised).max(Decimal::ZERO);

        let progress_percent = if goal <= Decimal::ZERO {
            100
        } else {
            (total_raised * Decimal::ONE_HUNDRED / goal)
                .floor()
                .to_u8()
                .map_or(100, |p| p.min(100))
        };

        Self {
            goal,
            total_raised,
            donor_count,
            remaining,
            progress_percent,
        }
    }

    pub fn is_goal_reached(&self) -> bool {
        self.remaining.is_zero()
    }

    pub fn has_donations(&self) -> bool {
        self.donor_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_campaign_has_raised_nothing() {
        let s = CampaignSummary::compute(dec!(5000), Vec::new());
        assert_eq!(s.total_raised, Decimal::ZERO);
        assert_eq!(s.donor_count, 0);
        assert_eq!(s.remaining, dec!(5000));
        assert_eq!(s.progress_percent, 0);
        assert!(!s.has_donations());
    }

    #[test]
    fn sums_amounts_and_floors_progress() {
        let s = CampaignSummary::compute(dec!(1000), [dec!(10.50), dec!(20), dec!(303.49)]);
        assert_eq!(s.total_raised, dec!(333.99));
        assert_eq!(s.donor_count, 3);
        assert_eq!(s.remaining, dec!(666.01));
        assert_eq!(s.progress_percent, 33);
    }

    #[test]
    fn overshooting_the_goal_clamps() {
        let s = CampaignSummary::compute(dec!(100), [dec!(80), dec!(4500)]);
        assert_eq!(s.remaining, Decimal::ZERO);
        assert_eq!(s.progress_percent, 100);
        assert!(s.is_goal_reached());
    }

    #[test]
    fn zero_goal_counts_as_reached() {
        let s = CampaignSummary::compute(Decimal::ZERO, Vec::new());
        assert_eq!(s.progress_percent, 100);
        assert!(s.is_goal_reached());
    }
}
