use super::domain::{CompanyId, CreditHistory};

/// Storage abstraction for credit-history snapshots so the service can be exercised in
/// isolation from the platform backend.
pub trait CreditHistoryStore: Send + Sync {
    /// Replace the snapshot held for `company`.
    fn save(&self, company: CompanyId, history: CreditHistory) -> Result<(), StoreError>;
    fn fetch(&self, company: &CompanyId) -> Result<Option<CreditHistory>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("credit history not found")]
    NotFound,
    #[error("credit history store unavailable: {0}")]
    Unavailable(String),
}
