use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::FactorScore;
use crate::scoring::domain::CreditHistory;

/// Synthetic type standing in for all supplier credits.
pub const COMMERCIAL_CREDIT_TYPE: &str = "Commercial Credit";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditMixMetrics {
    pub type_count: u32,
    pub accounts_by_type: BTreeMap<String, u32>,
}

pub(crate) fn score_credit_mix(history: &CreditHistory) -> FactorScore<CreditMixMetrics> {
    let mut accounts_by_type: BTreeMap<String, u32> = BTreeMap::new();

    for account in &history.credit_accounts {
        let kind = account.kind.trim();
        if kind.is_empty() {
            continue;
        }
        *accounts_by_type.entry(kind.to_string()).or_default() += 1;
    }

    if !history.supplier_credits.is_empty() {
        *accounts_by_type
            .entry(COMMERCIAL_CREDIT_TYPE.to_string())
            .or_default() += history.supplier_credits.len() as u32;
    }

    let type_count = accounts_by_type.len() as u32;
    let score = match type_count {
        0 => 50,
        1 => 60,
        2 => 75,
        3 => 90,
        _ => 100,
    };

    FactorScore::new(
        score,
        CreditMixMetrics {
            type_count,
            accounts_by_type,
        },
    )
}
