use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::CreditHistory;
use super::factors::{
    score_credit_mix, score_history_length, score_incidents, score_new_applications,
    score_payment_history, score_utilization, CreditMixMetrics, FactorScore,
    HistoryLengthMetrics, NewCreditFactor, NewCreditVariant, PaymentHistoryMetrics,
    UtilizationMetrics,
};
use super::levels::{CreditLevel, TrustTier};
use super::weights::{round_weighted_bps, FactorKind, WEIGHT_BASIS_POINTS};

const RESCALE_FLOOR: f64 = 300.0;
const RESCALE_SPAN: f64 = 550.0;

/// Caller-controlled inputs for a computation. The reference date stands in for "now" so
/// identical inputs always produce identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringOptions {
    pub variant: NewCreditVariant,
    pub reference_date: NaiveDate,
}

impl ScoringOptions {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            variant: NewCreditVariant::default(),
            reference_date,
        }
    }

    pub fn with_variant(mut self, variant: NewCreditVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// Stateless evaluator combining the five credit factors into a composite score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, history: &CreditHistory, options: &ScoringOptions) -> CompositeResult {
        let factor_scores = FactorScores {
            payment_history: score_payment_history(history),
            credit_utilization: score_utilization(history),
            history_length: score_history_length(history, options.reference_date),
            credit_mix: score_credit_mix(history),
            incidents_or_new_applications: match options.variant {
                NewCreditVariant::Incidents => NewCreditFactor::Incidents(score_incidents(history)),
                NewCreditVariant::NewApplications => NewCreditFactor::NewApplications(
                    score_new_applications(history, options.reference_date),
                ),
            },
        };

        let contributions = factor_scores.contributions();
        let weighted_bps: u32 = FactorKind::ALL
            .iter()
            .map(|factor| u32::from(factor_scores.score(*factor)) * factor.weight_bps())
            .sum();
        let composite_score = f64::from(weighted_bps) / f64::from(WEIGHT_BASIS_POINTS);
        let rounded_composite = round_weighted_bps(weighted_bps);
        let rescaled_score = rescale(composite_score);

        debug!(
            composite = composite_score,
            rescaled = rescaled_score,
            variant = %options.variant,
            "credit composite computed"
        );

        CompositeResult {
            composite_score,
            rounded_composite,
            rescaled_score,
            credit_level: CreditLevel::from_rescaled(rescaled_score),
            trust_tier: TrustTier::from_score(rounded_composite),
            variant: options.variant,
            reference_date: options.reference_date,
            factor_scores,
            contributions,
        }
    }
}

/// Convenience wrapper around [`ScoringEngine::compute`].
pub fn compute_score(history: &CreditHistory, options: &ScoringOptions) -> CompositeResult {
    ScoringEngine.compute(history, options)
}

/// Map a 0–100 composite onto the 300–850 credit-score range.
pub fn rescale(composite: f64) -> u16 {
    let composite = composite.clamp(0.0, 100.0);
    (RESCALE_FLOOR + composite * RESCALE_SPAN / 100.0).round() as u16
}

/// The five per-factor results, keyed by factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScores {
    pub payment_history: FactorScore<PaymentHistoryMetrics>,
    pub credit_utilization: FactorScore<UtilizationMetrics>,
    pub history_length: FactorScore<HistoryLengthMetrics>,
    pub credit_mix: FactorScore<CreditMixMetrics>,
    pub incidents_or_new_applications: NewCreditFactor,
}

impl FactorScores {
    pub fn score(&self, factor: FactorKind) -> u8 {
        match factor {
            FactorKind::PaymentHistory => self.payment_history.score,
            FactorKind::CreditUtilization => self.credit_utilization.score,
            FactorKind::HistoryLength => self.history_length.score,
            FactorKind::CreditMix => self.credit_mix.score,
            FactorKind::IncidentsOrNewApplications => self.incidents_or_new_applications.score(),
        }
    }

    fn notes(&self, factor: FactorKind) -> String {
        match factor {
            FactorKind::PaymentHistory => {
                let metrics = &self.payment_history.supporting_metrics;
                format!(
                    "{} of {} payments on time ({:.1}%)",
                    metrics.on_time_payments, metrics.total_payments, metrics.percentage
                )
            }
            FactorKind::CreditUtilization => {
                let metrics = &self.credit_utilization.supporting_metrics;
                format!("{:.1}% of available credit in use", metrics.utilization)
            }
            FactorKind::HistoryLength => {
                let metrics = &self.history_length.supporting_metrics;
                format!(
                    "average account age {:.1} years across {} account(s)",
                    metrics.average_age_years, metrics.accounts_counted
                )
            }
            FactorKind::CreditMix => {
                let metrics = &self.credit_mix.supporting_metrics;
                format!("{} distinct credit type(s)", metrics.type_count)
            }
            FactorKind::IncidentsOrNewApplications => self.incidents_or_new_applications.notes(),
        }
    }

    fn contributions(&self) -> Vec<FactorContribution> {
        FactorKind::ALL
            .iter()
            .map(|factor| {
                let score = self.score(*factor);
                FactorContribution {
                    factor: *factor,
                    score,
                    weight: factor.weight(),
                    weighted: f64::from(u32::from(score) * factor.weight_bps())
                        / f64::from(WEIGHT_BASIS_POINTS),
                    notes: self.notes(*factor),
                }
            })
            .collect()
    }
}

/// Discrete contribution to the composite, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorContribution {
    pub factor: FactorKind,
    pub score: u8,
    pub weight: f64,
    pub weighted: f64,
    pub notes: String,
}

/// Composite output with the per-factor breakdown behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResult {
    pub composite_score: f64,
    pub rounded_composite: u8,
    pub rescaled_score: u16,
    pub credit_level: CreditLevel,
    pub trust_tier: TrustTier,
    pub variant: NewCreditVariant,
    pub reference_date: NaiveDate,
    pub factor_scores: FactorScores,
    pub contributions: Vec<FactorContribution>,
}

impl CompositeResult {
    pub fn level(&self) -> CreditLevel {
        self.credit_level
    }
}
