use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use pyme360::scoring::{CompanyId, CreditHistory, CreditHistoryStore, NewCreditVariant, StoreError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store keeping the latest snapshot per company.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCreditHistoryStore {
    histories: Arc<Mutex<HashMap<CompanyId, CreditHistory>>>,
}

impl InMemoryCreditHistoryStore {
    fn poisoned() -> StoreError {
        StoreError::Unavailable("credit history store lock poisoned".to_string())
    }
}

impl CreditHistoryStore for InMemoryCreditHistoryStore {
    fn save(&self, company: CompanyId, history: CreditHistory) -> Result<(), StoreError> {
        let mut guard = self.histories.lock().map_err(|_| Self::poisoned())?;
        guard.insert(company, history);
        Ok(())
    }

    fn fetch(&self, company: &CompanyId) -> Result<Option<CreditHistory>, StoreError> {
        let guard = self.histories.lock().map_err(|_| Self::poisoned())?;
        Ok(guard.get(company).cloned())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_variant(raw: &str) -> Result<NewCreditVariant, String> {
    raw.parse::<NewCreditVariant>()
        .map_err(|err| err.to_string())
}
