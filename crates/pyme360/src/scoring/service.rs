use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{CompanyId, CreditHistory};
use super::engine::{CompositeResult, ScoringEngine, ScoringOptions};
use super::factors::{score_payment_history, NewCreditVariant};
use super::repository::{CreditHistoryStore, StoreError};
use super::trust::{TrustComponents, TrustScoreCard};

/// Per-request overrides. Unset fields fall back to the service defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub variant: Option<NewCreditVariant>,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Service composing the credit-history store with the scoring engine.
pub struct ScoringService<S> {
    store: Arc<S>,
    engine: ScoringEngine,
    default_variant: NewCreditVariant,
}

impl<S> ScoringService<S>
where
    S: CreditHistoryStore + 'static,
{
    pub fn new(store: Arc<S>, default_variant: NewCreditVariant) -> Self {
        Self {
            store,
            engine: ScoringEngine::new(),
            default_variant,
        }
    }

    pub fn default_variant(&self) -> NewCreditVariant {
        self.default_variant
    }

    /// Store the latest credit-history snapshot for a company.
    pub fn record_history(
        &self,
        company: CompanyId,
        history: CreditHistory,
    ) -> Result<(), ScoringServiceError> {
        info!(
            company = %company,
            accounts = history.credit_accounts.len(),
            supplier_credits = history.supplier_credits.len(),
            "recording credit history"
        );
        self.store.save(company, history)?;
        Ok(())
    }

    /// Score the stored snapshot of a company.
    pub fn credit_score(
        &self,
        company: &CompanyId,
        request: ScoreRequest,
    ) -> Result<CompositeResult, ScoringServiceError> {
        let history = self.store.fetch(company)?.ok_or(StoreError::NotFound)?;
        let result = self.score_history(&history, request);
        info!(
            company = %company,
            rescaled = result.rescaled_score,
            level = result.credit_level.label(),
            "company credit score computed"
        );
        Ok(result)
    }

    /// Score a history supplied by the caller without storing it.
    pub fn score_history(&self, history: &CreditHistory, request: ScoreRequest) -> CompositeResult {
        let options = self.resolve_options(request);
        let result = self.engine.compute(history, &options);
        info!(
            composite = result.composite_score,
            rescaled = result.rescaled_score,
            variant = %options.variant,
            reference_date = %options.reference_date,
            "credit score computed"
        );
        result
    }

    /// Combine pre-computed trust components into a trust score card.
    pub fn trust_score(&self, components: &TrustComponents) -> TrustScoreCard {
        self.trust_score_with_history(components, None)
    }

    /// Trust score card whose missing punctuality component is filled from the payment
    /// history factor of `history`, when one is given.
    pub fn trust_score_with_history(
        &self,
        components: &TrustComponents,
        history: Option<&CreditHistory>,
    ) -> TrustScoreCard {
        let card = build_trust_card(components, history);
        info!(score = card.score, tier = card.tier.label(), "trust score computed");
        card
    }

    /// Trust score for a company, using its stored payment history when the punctuality
    /// component is not supplied.
    pub fn company_trust_score(
        &self,
        company: &CompanyId,
        components: &TrustComponents,
    ) -> Result<TrustScoreCard, ScoringServiceError> {
        let history = match components.payment_punctuality {
            Some(_) => None,
            None => self.store.fetch(company)?,
        };

        let card = build_trust_card(components, history.as_ref());
        info!(
            company = %company,
            score = card.score,
            tier = card.tier.label(),
            "company trust score computed"
        );
        Ok(card)
    }

    fn resolve_options(&self, request: ScoreRequest) -> ScoringOptions {
        let reference_date = request
            .as_of
            .unwrap_or_else(|| Local::now().date_naive());
        ScoringOptions::new(reference_date)
            .with_variant(request.variant.unwrap_or(self.default_variant))
    }
}

fn build_trust_card(
    components: &TrustComponents,
    history: Option<&CreditHistory>,
) -> TrustScoreCard {
    let payment_history_score = match (components.payment_punctuality, history) {
        (None, Some(history)) => Some(score_payment_history(history).score),
        _ => None,
    };
    TrustScoreCard::compute(components, payment_history_score)
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
