//! Credit-score and trust-score computation.
//!
//! [`ScoringEngine`] is pure: it reads a [`CreditHistory`] and a caller-supplied reference
//! date and never touches the clock or any store. [`ScoringService`] adds the store seam and
//! clock resolution, and [`scoring_router`] exposes the service over HTTP.

pub mod domain;
pub mod engine;
pub mod factors;
pub mod import;
pub mod levels;
pub mod repository;
pub mod router;
pub mod service;
pub mod trust;
pub mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    CompanyId, CreditAccount, CreditApplication, CreditHistory, CreditIncident, Payment,
    PaymentStatus, PaymentStatusError, SupplierCredit,
};
pub use engine::{
    compute_score, rescale, CompositeResult, FactorContribution, FactorScores, ScoringEngine,
    ScoringOptions,
};
pub use factors::{FactorScore, NewCreditFactor, NewCreditVariant, UnknownVariant};
pub use import::{load_history_from_path, load_history_from_reader, HistoryImportError};
pub use levels::{CreditLevel, TrustBenefit, TrustTier};
pub use repository::{CreditHistoryStore, StoreError};
pub use router::scoring_router;
pub use service::{ScoreRequest, ScoringService, ScoringServiceError};
pub use trust::{TrustComponentKind, TrustComponents, TrustContribution, TrustScoreCard};
pub use weights::FactorKind;
