use serde::{Deserialize, Serialize};

/// Descriptive band for a 300–850 credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreditLevel {
    Poor,
    Low,
    Fair,
    Good,
    Excellent,
}

impl CreditLevel {
    pub fn from_rescaled(score: u16) -> Self {
        if score >= 750 {
            CreditLevel::Excellent
        } else if score >= 670 {
            CreditLevel::Good
        } else if score >= 580 {
            CreditLevel::Fair
        } else if score >= 500 {
            CreditLevel::Low
        } else {
            CreditLevel::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CreditLevel::Excellent => "Excellent",
            CreditLevel::Good => "Good",
            CreditLevel::Fair => "Fair",
            CreditLevel::Low => "Low",
            CreditLevel::Poor => "Poor",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            CreditLevel::Excellent => {
                "Top decile score; qualifies for the best rates and credit conditions."
            }
            CreditLevel::Good => "Above average; favorable credit conditions are available.",
            CreditLevel::Fair => {
                "Close to average; there is room to improve before accessing better conditions."
            }
            CreditLevel::Low => {
                "Below average; new credit may require additional guarantees."
            }
            CreditLevel::Poor => {
                "Considerably low; focus on payment punctuality and reducing current debt."
            }
        }
    }
}

/// Tier for a 0–100 trust score. Distinct from [`CreditLevel`], which bands the rescaled
/// credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrustTier {
    Unrated,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl TrustTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 95 {
            TrustTier::Platinum
        } else if score >= 80 {
            TrustTier::Gold
        } else if score >= 70 {
            TrustTier::Silver
        } else if score >= 60 {
            TrustTier::Bronze
        } else {
            TrustTier::Unrated
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TrustTier::Platinum => "Platinum",
            TrustTier::Gold => "Gold",
            TrustTier::Silver => "Silver",
            TrustTier::Bronze => "Bronze",
            TrustTier::Unrated => "Unrated",
        }
    }

    /// Benefits unlocked at this tier, including those of every lower tier.
    pub fn benefits(self) -> Vec<TrustBenefit> {
        BENEFIT_LADDER
            .iter()
            .filter(|(tier, _)| *tier <= self)
            .map(|(_, benefit)| *benefit)
            .collect()
    }
}

/// Program perk granted to companies at or above a trust tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustBenefit {
    pub name: &'static str,
    pub provider: &'static str,
    pub detail: &'static str,
}

const BENEFIT_LADDER: [(TrustTier, TrustBenefit); 7] = [
    (
        TrustTier::Bronze,
        TrustBenefit {
            name: "Basic Visibility",
            provider: "PyME360",
            detail: "Listing in the company directory",
        },
    ),
    (
        TrustTier::Silver,
        TrustBenefit {
            name: "Preferential Rates",
            provider: "Partner Bank",
            detail: "0.5% discount on interest rates",
        },
    ),
    (
        TrustTier::Silver,
        TrustBenefit {
            name: "Certification Seal",
            provider: "PyME360",
            detail: "Verifiable digital badge",
        },
    ),
    (
        TrustTier::Gold,
        TrustBenefit {
            name: "Priority Financing",
            provider: "Investment Fund",
            detail: "Access to exclusive credit lines",
        },
    ),
    (
        TrustTier::Gold,
        TrustBenefit {
            name: "Premium Networking",
            provider: "Chamber of Commerce",
            detail: "Invitations to monthly members-only events",
        },
    ),
    (
        TrustTier::Platinum,
        TrustBenefit {
            name: "Mentorship Program",
            provider: "Business Association",
            detail: "Access to executive mentors",
        },
    ),
    (
        TrustTier::Platinum,
        TrustBenefit {
            name: "International Financing",
            provider: "International Bank",
            detail: "Expansion loans with special conditions",
        },
    ),
];
