use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{tier_at_least, FactorScore, NEUTRAL_SCORE};
use crate::scoring::domain::{parse_calendar_date, CreditHistory, PaymentStatus};

const PAYMENT_TIERS: [(f64, i32); 5] = [
    (98.0, 100),
    (95.0, 90),
    (90.0, 80),
    (85.0, 70),
    (75.0, 60),
];
const SERIES_MONTHS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHistoryMetrics {
    pub percentage: f64,
    pub total_payments: u32,
    pub on_time_payments: u32,
    pub late_payments: u32,
    /// On-time vs. late counts for the last months present in the data, oldest first.
    pub monthly: Vec<MonthlyPayments>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPayments {
    pub year: i32,
    pub month: u32,
    pub on_time: u32,
    pub late: u32,
}

pub(crate) fn score_payment_history(
    history: &CreditHistory,
) -> FactorScore<PaymentHistoryMetrics> {
    let mut total_payments = 0u32;
    let mut on_time_payments = 0u32;
    let mut by_month: BTreeMap<(i32, u32), MonthlyPayments> = BTreeMap::new();

    for payment in history.payments() {
        total_payments += 1;
        let on_time = payment.status == PaymentStatus::OnTime;
        if on_time {
            on_time_payments += 1;
        }

        let Some(date) = parse_calendar_date(&payment.date) else {
            debug!(date = %payment.date, "payment date unparseable; excluded from monthly series");
            continue;
        };

        let bucket = by_month
            .entry((date.year(), date.month()))
            .or_insert_with(|| MonthlyPayments {
                year: date.year(),
                month: date.month(),
                on_time: 0,
                late: 0,
            });
        if on_time {
            bucket.on_time += 1;
        } else {
            bucket.late += 1;
        }
    }

    let late_payments = total_payments - on_time_payments;
    let skip = by_month.len().saturating_sub(SERIES_MONTHS);
    let monthly: Vec<MonthlyPayments> = by_month.into_values().skip(skip).collect();

    if total_payments == 0 {
        return FactorScore::new(
            NEUTRAL_SCORE,
            PaymentHistoryMetrics {
                percentage: 0.0,
                total_payments,
                on_time_payments,
                late_payments,
                monthly,
            },
        );
    }

    let percentage = f64::from(on_time_payments) * 100.0 / f64::from(total_payments);
    let score = tier_at_least(percentage, &PAYMENT_TIERS)
        .unwrap_or_else(|| (percentage / 2.0).floor() as i32);

    FactorScore::new(
        score,
        PaymentHistoryMetrics {
            percentage,
            total_payments,
            on_time_payments,
            late_payments,
            monthly,
        },
    )
}
