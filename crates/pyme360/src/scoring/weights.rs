use serde::{Deserialize, Serialize};

/// Weights are expressed in basis points so the sum can be checked exactly.
pub const WEIGHT_BASIS_POINTS: u32 = 10_000;

/// Round a basis-point weighted sum to a whole 0–100 score, ties to even.
pub(crate) fn round_weighted_bps(weighted_bps: u32) -> u8 {
    let whole = weighted_bps / WEIGHT_BASIS_POINTS;
    let remainder = weighted_bps % WEIGHT_BASIS_POINTS;
    let half = WEIGHT_BASIS_POINTS / 2;
    let rounded = if remainder > half || (remainder == half && whole % 2 == 1) {
        whole + 1
    } else {
        whole
    };
    rounded.min(100) as u8
}

/// The five weighted factors of the credit composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorKind {
    PaymentHistory,
    CreditUtilization,
    HistoryLength,
    CreditMix,
    IncidentsOrNewApplications,
}

impl FactorKind {
    pub const ALL: [FactorKind; 5] = [
        FactorKind::PaymentHistory,
        FactorKind::CreditUtilization,
        FactorKind::HistoryLength,
        FactorKind::CreditMix,
        FactorKind::IncidentsOrNewApplications,
    ];

    pub const fn weight_bps(self) -> u32 {
        match self {
            FactorKind::PaymentHistory => 3_500,
            FactorKind::CreditUtilization => 3_000,
            FactorKind::HistoryLength => 1_500,
            FactorKind::CreditMix => 1_000,
            FactorKind::IncidentsOrNewApplications => 1_000,
        }
    }

    pub fn weight(self) -> f64 {
        f64::from(self.weight_bps()) / f64::from(WEIGHT_BASIS_POINTS)
    }

    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::PaymentHistory => "Payment history",
            FactorKind::CreditUtilization => "Credit utilization",
            FactorKind::HistoryLength => "Credit history length",
            FactorKind::CreditMix => "Credit mix",
            FactorKind::IncidentsOrNewApplications => "Incidents / new applications",
        }
    }
}

const _: () = assert!(
    FactorKind::PaymentHistory.weight_bps()
        + FactorKind::CreditUtilization.weight_bps()
        + FactorKind::HistoryLength.weight_bps()
        + FactorKind::CreditMix.weight_bps()
        + FactorKind::IncidentsOrNewApplications.weight_bps()
        == WEIGHT_BASIS_POINTS
);
