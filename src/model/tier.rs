//! Recommendation tiers and their static specifications

use serde::{Deserialize, Serialize};

/// Risk/reward band a recommendation is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Conservative,
    Optimal,
    Stretch,
}

impl Tier {
    pub fn all() -> [Tier; 3] {
        [Tier::Conservative, Tier::Optimal, Tier::Stretch]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Conservative => "conservative",
            Tier::Optimal => "optimal",
            Tier::Stretch => "stretch",
        }
    }

    pub fn spec(&self) -> &'static TierSpec {
        match self {
            Tier::Conservative => &CONSERVATIVE_SPEC,
            Tier::Optimal => &OPTIMAL_SPEC,
            Tier::Stretch => &STRETCH_SPEC,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Static per-tier specification: the salary-increase band, the success
/// floor a job must clear, and display metadata.
#[derive(Debug, Clone, Serialize)]
pub struct TierSpec {
    pub tier: Tier,

    /// Inclusive lower bound on salary increase
    pub min_salary_increase: f64,

    /// Inclusive upper bound, open-ended for stretch
    pub max_salary_increase: Option<f64>,

    /// Minimum success-factor score to qualify
    pub min_success_probability: f64,

    pub description: &'static str,
    pub risk_level: RiskLevel,
    pub typical_companies: &'static [&'static str],
}

impl TierSpec {
    /// Whether a computed salary increase lands inside this tier's band.
    /// Bounds are inclusive on both ends; the gaps between bands are
    /// intentional and left untouched.
    pub fn contains_increase(&self, increase: f64) -> bool {
        if increase < self.min_salary_increase {
            return false;
        }
        match self.max_salary_increase {
            Some(max) => increase <= max,
            None => true,
        }
    }
}

static CONSERVATIVE_SPEC: TierSpec = TierSpec {
    tier: Tier::Conservative,
    min_salary_increase: 0.15,
    max_salary_increase: Some(0.20),
    min_success_probability: 0.70,
    description: "Safe moves with a solid raise and a high likelihood of landing the role",
    risk_level: RiskLevel::Low,
    typical_companies: &[
        "Established companies in your current industry",
        "Direct competitors familiar with your background",
        "Larger teams doing work you already do",
    ],
};

static OPTIMAL_SPEC: TierSpec = TierSpec {
    tier: Tier::Optimal,
    min_salary_increase: 0.25,
    max_salary_increase: Some(0.30),
    min_success_probability: 0.50,
    description: "The sweet spot: meaningful salary growth at a realistic success rate",
    risk_level: RiskLevel::Moderate,
    typical_companies: &[
        "Growth-stage companies expanding their teams",
        "Adjacent industries valuing your transferable skills",
        "Companies one size-tier up from your current employer",
    ],
};

static STRETCH_SPEC: TierSpec = TierSpec {
    tier: Tier::Stretch,
    min_salary_increase: 0.35,
    max_salary_increase: None,
    min_success_probability: 0.30,
    description: "Ambitious jumps with outsized rewards and real preparation required",
    risk_level: RiskLevel::High,
    typical_companies: &[
        "Top-tier companies with competitive hiring bars",
        "Senior roles a level above your current title",
        "High-growth startups with significant equity upside",
    ],
};

/// Static tier catalog for display
pub fn tier_catalog() -> Vec<&'static TierSpec> {
    Tier::all().iter().map(|tier| tier.spec()).collect()
}
