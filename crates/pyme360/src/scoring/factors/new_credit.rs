use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::FactorScore;
use crate::scoring::domain::{parse_calendar_date, CreditHistory};

const APPLICATION_WINDOW_DAYS: i64 = 365;

/// Strategy filling the fifth weight slot of the composite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewCreditVariant {
    /// Score by the number of reported credit incidents.
    #[default]
    Incidents,
    /// Score by credit applications filed in the trailing twelve months.
    NewApplications,
}

impl NewCreditVariant {
    pub const fn label(self) -> &'static str {
        match self {
            NewCreditVariant::Incidents => "incidents",
            NewCreditVariant::NewApplications => "new_applications",
        }
    }
}

impl fmt::Display for NewCreditVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NewCreditVariant {
    type Err = UnknownVariant;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "incidents" => Ok(NewCreditVariant::Incidents),
            "new_applications" => Ok(NewCreditVariant::NewApplications),
            _ => Err(UnknownVariant(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown new-credit variant '{0}' (expected 'incidents' or 'new_applications')")]
pub struct UnknownVariant(pub String);

/// Score held in the fifth weight slot, tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum NewCreditFactor {
    Incidents(FactorScore<IncidentMetrics>),
    NewApplications(FactorScore<ApplicationMetrics>),
}

impl NewCreditFactor {
    pub fn score(&self) -> u8 {
        match self {
            NewCreditFactor::Incidents(factor) => factor.score,
            NewCreditFactor::NewApplications(factor) => factor.score,
        }
    }

    pub fn variant(&self) -> NewCreditVariant {
        match self {
            NewCreditFactor::Incidents(_) => NewCreditVariant::Incidents,
            NewCreditFactor::NewApplications(_) => NewCreditVariant::NewApplications,
        }
    }

    pub(crate) fn notes(&self) -> String {
        match self {
            NewCreditFactor::Incidents(factor) => {
                format!("{} credit incident(s)", factor.supporting_metrics.incident_count)
            }
            NewCreditFactor::NewApplications(factor) => format!(
                "{} application(s) since {}",
                factor.supporting_metrics.recent_count, factor.supporting_metrics.window_start
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentMetrics {
    pub incident_count: u32,
    pub total_amount: f64,
    pub incidents_by_type: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationMetrics {
    pub recent_count: u32,
    /// Applications must be dated strictly after this day to count.
    pub window_start: NaiveDate,
    pub applications_skipped: u32,
}

pub(crate) fn score_incidents(history: &CreditHistory) -> FactorScore<IncidentMetrics> {
    let incidents = &history.credit_incidents;
    let incident_count = incidents.len() as u32;
    let total_amount: f64 = incidents.iter().map(|incident| incident.amount).sum();

    let mut incidents_by_type: BTreeMap<String, u32> = BTreeMap::new();
    for incident in incidents {
        *incidents_by_type.entry(incident.kind.clone()).or_default() += 1;
    }

    let score = match incident_count {
        0 => 100,
        1 => 80,
        2 => 60,
        3 | 4 => 40,
        _ => 20,
    };

    FactorScore::new(
        score,
        IncidentMetrics {
            incident_count,
            total_amount,
            incidents_by_type,
        },
    )
}

pub(crate) fn score_new_applications(
    history: &CreditHistory,
    reference_date: NaiveDate,
) -> FactorScore<ApplicationMetrics> {
    let window_start = reference_date
        .checked_sub_signed(Duration::days(APPLICATION_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);
    let mut recent_count = 0u32;
    let mut applications_skipped = 0u32;

    for application in &history.recent_applications {
        match parse_calendar_date(&application.date) {
            Some(filed) if filed > window_start => recent_count += 1,
            Some(_) => {}
            None => {
                applications_skipped += 1;
                debug!(
                    date = %application.date,
                    entity = %application.entity,
                    "application date unparseable; excluded from recent applications"
                );
            }
        }
    }

    let score = match recent_count {
        0 => 100,
        1 => 90,
        2 => 75,
        3 => 60,
        _ => 40,
    };

    FactorScore::new(
        score,
        ApplicationMetrics {
            recent_count,
            window_start,
            applications_skipped,
        },
    )
}
