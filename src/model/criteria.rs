//! Search criteria: the immutable per-request input describing the candidate

use crate::error::{CareerCompassError, Result};
use serde::{Deserialize, Serialize};

/// Career field of the candidate and the roles they target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerField {
    Technology,
    Finance,
    Healthcare,
    Marketing,
    Sales,
    Operations,
    Education,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    /// Numeric rank used to detect one-step upgrades (e.g. mid -> senior)
    pub fn rank(&self) -> u8 {
        match self {
            ExperienceLevel::Entry => 0,
            ExperienceLevel::Mid => 1,
            ExperienceLevel::Senior => 2,
            ExperienceLevel::Executive => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CompanySize::Startup => "startup",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
            CompanySize::Enterprise => "enterprise",
        };
        write!(f, "{}", label)
    }
}

/// Immutable per-request search input. Validated once before the pipeline runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub current_salary: f64,

    /// Target salary increase as a fraction (0.25 = 25%)
    pub target_salary_increase: f64,

    pub career_field: CareerField,
    pub experience_level: ExperienceLevel,

    /// Preferred metro areas, compared case-insensitively
    #[serde(default)]
    pub preferred_locations: Vec<String>,

    #[serde(default)]
    pub remote_acceptable: bool,

    #[serde(default)]
    pub max_commute_minutes: Option<u32>,

    #[serde(default)]
    pub required_benefits: Vec<String>,

    #[serde(default)]
    pub company_size_preference: Option<CompanySize>,

    #[serde(default)]
    pub industry_preference: Option<String>,

    #[serde(default)]
    pub equity_required: bool,

    /// Minimum acceptable company rating on a 0-5 scale
    #[serde(default)]
    pub min_company_rating: Option<f64>,
}

impl SearchCriteria {
    /// Validate request-level invariants. Invalid criteria are rejected
    /// before the pipeline runs and never retried.
    pub fn validate(&self) -> Result<()> {
        if !self.current_salary.is_finite() || self.current_salary <= 0.0 {
            return Err(CareerCompassError::InvalidCriteria(format!(
                "current_salary must be positive, got {}",
                self.current_salary
            )));
        }

        if !self.target_salary_increase.is_finite() || self.target_salary_increase <= 0.0 {
            return Err(CareerCompassError::InvalidCriteria(format!(
                "target_salary_increase must be positive, got {}",
                self.target_salary_increase
            )));
        }

        if let Some(rating) = self.min_company_rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(CareerCompassError::InvalidCriteria(format!(
                    "min_company_rating must be within 0-5, got {}",
                    rating
                )));
            }
        }

        Ok(())
    }

    /// Whether a metro area is one of the candidate's preferred locations
    pub fn prefers_location(&self, metro: &str) -> bool {
        self.preferred_locations
            .iter()
            .any(|loc| loc.eq_ignore_ascii_case(metro))
    }
}
