use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{tier_at_least, FactorScore, NEUTRAL_SCORE};
use crate::scoring::domain::{parse_calendar_date, CreditHistory};

const DAYS_PER_YEAR: f64 = 365.25;
const AGE_TIERS: [(f64, i32); 5] = [(7.0, 100), (5.0, 90), (3.0, 80), (2.0, 70), (1.0, 60)];
const YOUNG_HISTORY_SCORE: i32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryLengthMetrics {
    pub average_age_years: f64,
    pub accounts_counted: u32,
    pub accounts_skipped: u32,
    /// Oldest account first.
    pub account_ages: Vec<AccountAge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAge {
    pub entity: String,
    pub years: f64,
}

/// Average age of bank credit accounts at `reference_date`. Supplier credits carry no opening
/// date and are not part of this factor.
pub(crate) fn score_history_length(
    history: &CreditHistory,
    reference_date: NaiveDate,
) -> FactorScore<HistoryLengthMetrics> {
    let mut account_ages = Vec::with_capacity(history.credit_accounts.len());
    let mut accounts_skipped = 0u32;

    for account in &history.credit_accounts {
        match parse_calendar_date(&account.opened_date) {
            Some(opened) => {
                let years = (reference_date - opened).num_days() as f64 / DAYS_PER_YEAR;
                account_ages.push(AccountAge {
                    entity: account.entity.clone(),
                    years,
                });
            }
            None => {
                accounts_skipped += 1;
                debug!(
                    account = %account.id,
                    opened_date = %account.opened_date,
                    "opening date unparseable; account excluded from history length"
                );
            }
        }
    }

    account_ages.sort_by(|a, b| b.years.total_cmp(&a.years));
    let accounts_counted = account_ages.len() as u32;

    if account_ages.is_empty() {
        return FactorScore::new(
            NEUTRAL_SCORE,
            HistoryLengthMetrics {
                average_age_years: 0.0,
                accounts_counted,
                accounts_skipped,
                account_ages,
            },
        );
    }

    let average_age_years =
        account_ages.iter().map(|age| age.years).sum::<f64>() / f64::from(accounts_counted);
    let score = tier_at_least(average_age_years, &AGE_TIERS).unwrap_or(YOUNG_HISTORY_SCORE);

    FactorScore::new(
        score,
        HistoryLengthMetrics {
            average_age_years,
            accounts_counted,
            accounts_skipped,
            account_ages,
        },
    )
}
