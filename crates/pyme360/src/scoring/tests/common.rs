use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::scoring::domain::{CompanyId, CreditHistory};
use crate::scoring::import::load_history_from_reader;
use crate::scoring::repository::{CreditHistoryStore, StoreError};
use crate::scoring::{scoring_router, NewCreditVariant, ScoringService};

const TEXTILES_ANDINOS: &str = include_str!("../../../tests/fixtures/textiles_andinos.json");

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date")
}

pub(super) fn textiles_andinos() -> CreditHistory {
    load_history_from_reader(TEXTILES_ANDINOS.as_bytes()).expect("fixture parses")
}

pub(super) fn company() -> CompanyId {
    CompanyId("textiles-andinos".to_string())
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) histories: Arc<Mutex<HashMap<CompanyId, CreditHistory>>>,
}

impl CreditHistoryStore for MemoryStore {
    fn save(&self, company: CompanyId, history: CreditHistory) -> Result<(), StoreError> {
        let mut guard = self.histories.lock().expect("store mutex poisoned");
        guard.insert(company, history);
        Ok(())
    }

    fn fetch(&self, company: &CompanyId) -> Result<Option<CreditHistory>, StoreError> {
        let guard = self.histories.lock().expect("store mutex poisoned");
        Ok(guard.get(company).cloned())
    }
}

pub(super) struct UnavailableStore;

impl CreditHistoryStore for UnavailableStore {
    fn save(&self, _company: CompanyId, _history: CreditHistory) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _company: &CompanyId) -> Result<Option<CreditHistory>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (ScoringService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = ScoringService::new(store.clone(), NewCreditVariant::Incidents);
    (service, store)
}

pub(super) fn scoring_router_with_service(
    service: ScoringService<MemoryStore>,
) -> axum::Router {
    scoring_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
