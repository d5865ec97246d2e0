use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for the company a credit history belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub String);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Credit history snapshot consumed by the scoring engine.
///
/// Field names follow the platform's camelCase API. The Spanish names of the backend's
/// `historial_crediticio` document are accepted as aliases so those payloads ingest unchanged.
/// Missing collections are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditHistory {
    #[serde(default, alias = "cuentas_credito")]
    pub credit_accounts: Vec<CreditAccount>,
    #[serde(default, alias = "credito_proveedores")]
    pub supplier_credits: Vec<SupplierCredit>,
    #[serde(default, alias = "incidentes_crediticios")]
    pub credit_incidents: Vec<CreditIncident>,
    #[serde(default, alias = "solicitudes_credito_recientes")]
    pub recent_applications: Vec<CreditApplication>,
}

impl CreditHistory {
    /// Every payment across bank accounts and supplier credits, bank accounts first.
    pub fn payments(&self) -> impl Iterator<Item = &Payment> {
        self.credit_accounts
            .iter()
            .flat_map(|account| account.payments.iter())
            .chain(
                self.supplier_credits
                    .iter()
                    .flat_map(|credit| credit.payments.iter()),
            )
    }
}

/// Bank credit product held by the company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditAccount {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", alias = "tipo", default)]
    pub kind: String,
    #[serde(default, alias = "entidad")]
    pub entity: String,
    /// Raw opening date; unparseable values are skipped when computing account age.
    #[serde(default, alias = "fecha_apertura")]
    pub opened_date: String,
    #[serde(default, alias = "monto_original")]
    pub original_amount: f64,
    #[serde(default, alias = "saldo_actual")]
    pub current_balance: f64,
    #[serde(default, alias = "limite_credito")]
    pub credit_limit: f64,
    #[serde(default, alias = "tasa_interes")]
    pub interest_rate: f64,
    #[serde(default, alias = "plazo_meses")]
    pub term_months: u32,
    #[serde(default, alias = "estado")]
    pub status: String,
    #[serde(default, alias = "historial_pagos")]
    pub payments: Vec<Payment>,
}

/// Trade credit extended by a supplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierCredit {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "proveedor")]
    pub supplier: String,
    #[serde(default, alias = "terminos_pago")]
    pub payment_terms: String,
    #[serde(default, alias = "limite_credito")]
    pub credit_limit: f64,
    #[serde(default, alias = "saldo_actual")]
    pub current_balance: f64,
    #[serde(default, alias = "historial_pagos")]
    pub payments: Vec<Payment>,
}

/// Adverse event reported against the company (late payment, default, legal action).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditIncident {
    #[serde(rename = "type", alias = "tipo", default)]
    pub kind: String,
    #[serde(default, alias = "fecha")]
    pub date: String,
    #[serde(default, alias = "entidad")]
    pub entity: String,
    #[serde(default, alias = "detalles")]
    pub details: String,
    #[serde(default, alias = "monto")]
    pub amount: f64,
    #[serde(default, alias = "estado")]
    pub status: String,
}

/// Credit application filed by the company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditApplication {
    #[serde(default, alias = "fecha")]
    pub date: String,
    #[serde(default, alias = "entidad")]
    pub entity: String,
    #[serde(rename = "type", alias = "tipo", default)]
    pub kind: String,
    #[serde(default, alias = "monto")]
    pub amount: f64,
    #[serde(default, alias = "estado")]
    pub status: String,
}

/// Single installment recorded against an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, alias = "fecha")]
    pub date: String,
    #[serde(default, alias = "monto")]
    pub amount: f64,
    #[serde(alias = "estado")]
    pub status: PaymentStatus,
}

/// Normalized payment outcome.
///
/// Free-text statuses are resolved here, at ingestion, so scoring never matches strings:
/// `on_time`, `on time`, or anything containing `a tiempo` is on time, any other non-blank
/// text (`late`, `Atrasado (30 días)`, ...) is late.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum PaymentStatus {
    OnTime,
    Late,
}

impl FromStr for PaymentStatus {
    type Err = PaymentStatusError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(PaymentStatusError::Blank);
        }

        let on_time = matches!(normalized.as_str(), "on_time" | "on time" | "ontime")
            || normalized.contains("a tiempo");

        Ok(if on_time {
            PaymentStatus::OnTime
        } else {
            PaymentStatus::Late
        })
    }
}

impl TryFrom<String> for PaymentStatus {
    type Error = PaymentStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Raised when a payment status cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentStatusError {
    #[error("payment status must not be blank")]
    Blank,
}

/// Parse the calendar date formats seen in credit-history payloads.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps; anything else yields `None`.
pub(crate) fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc().date())
}
