//! Individual factor scorers. Each one is a pure function over a [`CreditHistory`] that
//! returns a clamped 0–100 score together with the metrics behind it.
//!
//! [`CreditHistory`]: super::domain::CreditHistory

mod credit_mix;
mod history_length;
mod new_credit;
mod payment_history;
mod utilization;

pub use credit_mix::{CreditMixMetrics, COMMERCIAL_CREDIT_TYPE};
pub use history_length::{AccountAge, HistoryLengthMetrics};
pub use new_credit::{
    ApplicationMetrics, IncidentMetrics, NewCreditFactor, NewCreditVariant, UnknownVariant,
};
pub use payment_history::{MonthlyPayments, PaymentHistoryMetrics};
pub use utilization::{AccountUtilization, CreditSource, UtilizationMetrics};

pub(crate) use credit_mix::score_credit_mix;
pub(crate) use history_length::score_history_length;
pub(crate) use new_credit::{score_incidents, score_new_applications};
pub(crate) use payment_history::score_payment_history;
pub(crate) use utilization::score_utilization;

use serde::{Deserialize, Serialize};

/// Score substituted when a factor has nothing to measure.
pub(crate) const NEUTRAL_SCORE: i32 = 50;

/// Outcome of a single factor: the 0–100 score and its supporting metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore<M> {
    pub score: u8,
    pub supporting_metrics: M,
}

impl<M> FactorScore<M> {
    pub(crate) fn new(score: i32, supporting_metrics: M) -> Self {
        Self {
            score: score.clamp(0, 100) as u8,
            supporting_metrics,
        }
    }
}

/// First tier whose floor the value reaches. Tiers must be ordered by descending floor.
pub(crate) fn tier_at_least(value: f64, tiers: &[(f64, i32)]) -> Option<i32> {
    tiers
        .iter()
        .find(|(floor, _)| value >= *floor)
        .map(|(_, score)| *score)
}

/// First tier whose ceiling covers the value. Tiers must be ordered by ascending ceiling.
pub(crate) fn tier_at_most(value: f64, tiers: &[(f64, i32)]) -> Option<i32> {
    tiers
        .iter()
        .find(|(ceiling, _)| value <= *ceiling)
        .map(|(_, score)| *score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_scores_are_clamped() {
        assert_eq!(FactorScore::new(140, ()).score, 100);
        assert_eq!(FactorScore::new(-3, ()).score, 0);
        assert_eq!(FactorScore::new(75, ()).score, 75);
    }

    #[test]
    fn tier_lookups_take_first_match() {
        let floors = [(90.0, 3), (50.0, 2)];
        assert_eq!(tier_at_least(90.0, &floors), Some(3));
        assert_eq!(tier_at_least(89.9, &floors), Some(2));
        assert_eq!(tier_at_least(10.0, &floors), None);

        let ceilings = [(10.0, 100), (30.0, 90)];
        assert_eq!(tier_at_most(10.0, &ceilings), Some(100));
        assert_eq!(tier_at_most(10.5, &ceilings), Some(90));
        assert_eq!(tier_at_most(31.0, &ceilings), None);
    }
}
