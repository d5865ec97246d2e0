use serde::{Deserialize, Serialize};

use super::levels::{TrustBenefit, TrustTier};
use super::weights::{round_weighted_bps, WEIGHT_BASIS_POINTS};

/// Punctuality assumed when neither an explicit score nor a payment history is available.
pub const DEFAULT_PAYMENT_PUNCTUALITY: u8 = 85;

/// Pre-computed business-practice scores feeding the PyME360 trust score.
///
/// Each value is expected in 0–100 and is clamped on use. `paymentPunctuality` may be
/// omitted, in which case the payment-history factor of the company's credit score stands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustComponents {
    #[serde(alias = "sostenibilidad")]
    pub sustainability: u8,
    #[serde(alias = "cumplimiento_fiscal")]
    pub tax_compliance: u8,
    #[serde(alias = "practicas_laborales")]
    pub labor_practices: u8,
    #[serde(alias = "estabilidad_financiera")]
    pub financial_stability: u8,
    #[serde(default, alias = "puntualidad_pagos")]
    pub payment_punctuality: Option<u8>,
    #[serde(alias = "innovacion")]
    pub innovation: u8,
}

/// The six weighted components of the trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrustComponentKind {
    Sustainability,
    TaxCompliance,
    LaborPractices,
    FinancialStability,
    PaymentPunctuality,
    Innovation,
}

impl TrustComponentKind {
    pub const ALL: [TrustComponentKind; 6] = [
        TrustComponentKind::Sustainability,
        TrustComponentKind::TaxCompliance,
        TrustComponentKind::LaborPractices,
        TrustComponentKind::FinancialStability,
        TrustComponentKind::PaymentPunctuality,
        TrustComponentKind::Innovation,
    ];

    pub const fn weight_bps(self) -> u32 {
        match self {
            TrustComponentKind::Sustainability => 1_500,
            TrustComponentKind::TaxCompliance => 2_000,
            TrustComponentKind::LaborPractices => 1_500,
            TrustComponentKind::FinancialStability => 2_000,
            TrustComponentKind::PaymentPunctuality => 2_000,
            TrustComponentKind::Innovation => 1_000,
        }
    }

    pub fn weight(self) -> f64 {
        f64::from(self.weight_bps()) / f64::from(WEIGHT_BASIS_POINTS)
    }

    pub const fn label(self) -> &'static str {
        match self {
            TrustComponentKind::Sustainability => "Sustainability",
            TrustComponentKind::TaxCompliance => "Tax compliance",
            TrustComponentKind::LaborPractices => "Labor practices",
            TrustComponentKind::FinancialStability => "Financial stability",
            TrustComponentKind::PaymentPunctuality => "Payment punctuality",
            TrustComponentKind::Innovation => "Innovation",
        }
    }
}

const _: () = assert!(
    TrustComponentKind::Sustainability.weight_bps()
        + TrustComponentKind::TaxCompliance.weight_bps()
        + TrustComponentKind::LaborPractices.weight_bps()
        + TrustComponentKind::FinancialStability.weight_bps()
        + TrustComponentKind::PaymentPunctuality.weight_bps()
        + TrustComponentKind::Innovation.weight_bps()
        == WEIGHT_BASIS_POINTS
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustContribution {
    pub component: TrustComponentKind,
    pub score: u8,
    pub weight: f64,
    pub weighted: f64,
}

/// Weighted trust score with its tier and earned benefits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustScoreCard {
    pub score: u8,
    pub composite: f64,
    pub tier: TrustTier,
    pub benefits: Vec<TrustBenefit>,
    pub contributions: Vec<TrustContribution>,
}

impl TrustScoreCard {
    /// Combine the components. `payment_history_score` fills in a missing punctuality score
    /// before the fixed default is used.
    pub fn compute(components: &TrustComponents, payment_history_score: Option<u8>) -> Self {
        let punctuality = components
            .payment_punctuality
            .or(payment_history_score)
            .unwrap_or(DEFAULT_PAYMENT_PUNCTUALITY);

        let contributions: Vec<TrustContribution> = TrustComponentKind::ALL
            .iter()
            .map(|component| {
                let raw = match component {
                    TrustComponentKind::Sustainability => components.sustainability,
                    TrustComponentKind::TaxCompliance => components.tax_compliance,
                    TrustComponentKind::LaborPractices => components.labor_practices,
                    TrustComponentKind::FinancialStability => components.financial_stability,
                    TrustComponentKind::PaymentPunctuality => punctuality,
                    TrustComponentKind::Innovation => components.innovation,
                };
                let score = raw.min(100);
                TrustContribution {
                    component: *component,
                    score,
                    weight: component.weight(),
                    weighted: f64::from(u32::from(score) * component.weight_bps())
                        / f64::from(WEIGHT_BASIS_POINTS),
                }
            })
            .collect();

        let weighted_bps: u32 = contributions
            .iter()
            .map(|entry| u32::from(entry.score) * entry.component.weight_bps())
            .sum();
        let composite = f64::from(weighted_bps) / f64::from(WEIGHT_BASIS_POINTS);
        let score = round_weighted_bps(weighted_bps);
        let tier = TrustTier::from_score(score);

        Self {
            score,
            composite,
            tier,
            benefits: tier.benefits(),
            contributions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(punctuality: Option<u8>) -> TrustComponents {
        TrustComponents {
            sustainability: 80,
            tax_compliance: 90,
            labor_practices: 75,
            financial_stability: 85,
            payment_punctuality: punctuality,
            innovation: 70,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = TrustComponentKind::ALL
            .iter()
            .map(|component| component.weight())
            .sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn combines_components_with_fixed_weights() {
        // 12 + 18 + 11.25 + 17 + 18 + 7 = 83.25
        let card = TrustScoreCard::compute(&components(Some(90)), None);
        assert_eq!(card.composite, 83.25);
        assert_eq!(card.score, 83);
        assert_eq!(card.tier, TrustTier::Gold);
        assert_eq!(card.benefits.len(), 5);
        assert_eq!(card.contributions.len(), 6);
    }

    #[test]
    fn punctuality_falls_back_to_payment_history_then_default() {
        let from_history = TrustScoreCard::compute(&components(None), Some(60));
        let punctuality = from_history
            .contributions
            .iter()
            .find(|entry| entry.component == TrustComponentKind::PaymentPunctuality)
            .expect("punctuality contribution present");
        assert_eq!(punctuality.score, 60);

        let defaulted = TrustScoreCard::compute(&components(None), None);
        let punctuality = defaulted
            .contributions
            .iter()
            .find(|entry| entry.component == TrustComponentKind::PaymentPunctuality)
            .expect("punctuality contribution present");
        assert_eq!(punctuality.score, DEFAULT_PAYMENT_PUNCTUALITY);
    }

    #[test]
    fn half_point_composites_round_to_even() {
        // 12 + 18 + 10.5 + 16 + 18 + 8 = 82.5
        let card = TrustScoreCard::compute(
            &TrustComponents {
                sustainability: 80,
                tax_compliance: 90,
                labor_practices: 70,
                financial_stability: 80,
                payment_punctuality: Some(90),
                innovation: 80,
            },
            None,
        );
        assert_eq!(card.composite, 82.5);
        assert_eq!(card.score, 82);
        assert_eq!(card.tier, TrustTier::Gold);
    }

    #[test]
    fn out_of_range_components_are_clamped() {
        let card = TrustScoreCard::compute(
            &TrustComponents {
                sustainability: 200,
                tax_compliance: 255,
                labor_practices: 100,
                financial_stability: 150,
                payment_punctuality: Some(101),
                innovation: 100,
            },
            None,
        );
        assert_eq!(card.score, 100);
        assert_eq!(card.tier, TrustTier::Platinum);
        assert_eq!(card.benefits.len(), 7);
    }

    #[test]
    fn ingests_spanish_component_names() {
        let raw = r#"{
            "sostenibilidad": 40,
            "cumplimiento_fiscal": 50,
            "practicas_laborales": 45,
            "estabilidad_financiera": 55,
            "innovacion": 30
        }"#;
        let parsed: TrustComponents = serde_json::from_str(raw).expect("spanish names ingest");
        assert_eq!(parsed.payment_punctuality, None);

        let card = TrustScoreCard::compute(&parsed, None);
        // 6 + 10 + 6.75 + 11 + 17 + 3 = 53.75
        assert_eq!(card.composite, 53.75);
        assert_eq!(card.tier, TrustTier::Unrated);
        assert!(card.benefits.is_empty());
    }
}
