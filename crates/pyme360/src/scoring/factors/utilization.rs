use serde::{Deserialize, Serialize};

use super::{tier_at_most, FactorScore, NEUTRAL_SCORE};
use crate::scoring::domain::CreditHistory;

// Lower utilization is better; a value sitting exactly on a ceiling takes the better tier.
const UTILIZATION_TIERS: [(f64, i32); 5] = [
    (10.0, 100),
    (30.0, 90),
    (50.0, 75),
    (70.0, 60),
    (90.0, 40),
];
const OVER_LIMIT_SCORE: i32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationMetrics {
    pub utilization: f64,
    pub total_debt: f64,
    pub total_available: f64,
    /// Per-account ratios, highest utilization first.
    pub by_account: Vec<AccountUtilization>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUtilization {
    pub name: String,
    pub source: CreditSource,
    pub balance: f64,
    pub limit: f64,
    pub utilization: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditSource {
    Bank,
    Supplier,
}

pub(crate) fn score_utilization(history: &CreditHistory) -> FactorScore<UtilizationMetrics> {
    let mut by_account: Vec<AccountUtilization> = history
        .credit_accounts
        .iter()
        .map(|account| {
            account_utilization(
                &account.entity,
                CreditSource::Bank,
                account.current_balance,
                account.credit_limit,
            )
        })
        .chain(history.supplier_credits.iter().map(|credit| {
            account_utilization(
                &credit.supplier,
                CreditSource::Supplier,
                credit.current_balance,
                credit.credit_limit,
            )
        }))
        .collect();

    let total_debt: f64 = by_account.iter().map(|entry| entry.balance).sum();
    let total_available: f64 = by_account.iter().map(|entry| entry.limit).sum();

    by_account.sort_by(|a, b| b.utilization.total_cmp(&a.utilization));

    if total_available <= 0.0 {
        return FactorScore::new(
            NEUTRAL_SCORE,
            UtilizationMetrics {
                utilization: 0.0,
                total_debt,
                total_available,
                by_account,
            },
        );
    }

    let utilization = total_debt * 100.0 / total_available;
    let score = tier_at_most(utilization, &UTILIZATION_TIERS).unwrap_or(OVER_LIMIT_SCORE);

    FactorScore::new(
        score,
        UtilizationMetrics {
            utilization,
            total_debt,
            total_available,
            by_account,
        },
    )
}

fn account_utilization(
    name: &str,
    source: CreditSource,
    balance: f64,
    limit: f64,
) -> AccountUtilization {
    let utilization = if limit > 0.0 {
        balance * 100.0 / limit
    } else {
        0.0
    };

    AccountUtilization {
        name: name.to_string(),
        source,
        balance,
        limit,
        utilization,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::{CreditAccount, SupplierCredit};

    fn single_account(balance: f64, limit: f64) -> CreditHistory {
        CreditHistory {
            credit_accounts: vec![CreditAccount {
                entity: "Bancolombia".to_string(),
                current_balance: balance,
                credit_limit: limit,
                ..CreditAccount::default()
            }],
            ..CreditHistory::default()
        }
    }

    #[test]
    fn zero_limits_score_neutral() {
        let factor = score_utilization(&single_account(500.0, 0.0));
        assert_eq!(factor.score, 50);
        assert_eq!(factor.supporting_metrics.utilization, 0.0);
        assert_eq!(factor.supporting_metrics.by_account[0].utilization, 0.0);

        assert_eq!(score_utilization(&CreditHistory::default()).score, 50);
    }

    #[test]
    fn tier_edges_resolve_to_the_better_tier() {
        assert_eq!(score_utilization(&single_account(10.0, 100.0)).score, 100);
        assert_eq!(score_utilization(&single_account(30.0, 100.0)).score, 90);
        assert_eq!(score_utilization(&single_account(50.0, 100.0)).score, 75);
        assert_eq!(score_utilization(&single_account(70.0, 100.0)).score, 60);
        assert_eq!(score_utilization(&single_account(90.0, 100.0)).score, 40);
        assert_eq!(score_utilization(&single_account(90.5, 100.0)).score, 20);
        assert_eq!(score_utilization(&single_account(130.0, 100.0)).score, 20);
    }

    #[test]
    fn supplier_credits_count_toward_totals_and_breakdown() {
        let history = CreditHistory {
            credit_accounts: vec![CreditAccount {
                entity: "Banco de Bogotá".to_string(),
                current_balance: 20.0,
                credit_limit: 100.0,
                ..CreditAccount::default()
            }],
            supplier_credits: vec![SupplierCredit {
                supplier: "Telas y Fibras Ltda.".to_string(),
                current_balance: 80.0,
                credit_limit: 100.0,
                ..SupplierCredit::default()
            }],
            ..CreditHistory::default()
        };

        let factor = score_utilization(&history);
        let metrics = &factor.supporting_metrics;
        assert_eq!(metrics.total_debt, 100.0);
        assert_eq!(metrics.total_available, 200.0);
        assert_eq!(metrics.utilization, 50.0);
        assert_eq!(factor.score, 75);
        assert_eq!(metrics.by_account[0].name, "Telas y Fibras Ltda.");
        assert_eq!(metrics.by_account[0].source, CreditSource::Supplier);
        assert_eq!(metrics.by_account[1].utilization, 20.0);
    }
}
