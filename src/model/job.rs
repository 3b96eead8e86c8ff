//! Job opportunity model and the ingestion adapter for external records

use crate::model::criteria::{CompanySize, ExperienceLevel};
use serde::{Deserialize, Serialize};

/// A job opportunity as supplied by a job source. Read-only to the engine:
/// derived outputs (tier, success probability) live on the recommendation,
/// never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOpportunity {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub metro_area: Option<String>,

    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_median: Option<f64>,

    pub remote_friendly: bool,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,

    pub industry: Option<String>,
    pub company_size: Option<CompanySize>,
    pub company_rating: Option<f64>,

    /// Level the posting targets; inferred from the title when absent
    pub experience_level: Option<ExperienceLevel>,

    pub equity_offered: bool,
    pub bonus_potential: Option<f64>,

    /// Precomputed 0-100 company metrics from the supplier
    pub diversity_score: f64,
    pub growth_score: f64,
    pub culture_score: f64,

    /// Supplier's own increase estimate, used when salary data is missing
    pub salary_increase_estimate: Option<f64>,
}

impl JobOpportunity {
    /// Metro used for location matching, falling back to the raw location
    pub fn metro(&self) -> &str {
        self.metro_area.as_deref().unwrap_or(&self.location)
    }

    /// Description plus requirement lines as one searchable text blob
    pub fn searchable_text(&self) -> String {
        let mut text = self.description.clone();
        for requirement in &self.requirements {
            text.push('\n');
            text.push_str(requirement);
        }
        text
    }
}

/// Raw record shape accepted from external job sources. Everything optional
/// fields can default is defaulted here, in one place, so the rest of the
/// engine works against a fully-formed [`JobOpportunity`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawJobRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub metro_area: Option<String>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub salary_median: Option<f64>,
    #[serde(default)]
    pub remote_friendly: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub company_size: Option<CompanySize>,
    #[serde(default)]
    pub company_rating: Option<f64>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub equity_offered: bool,
    #[serde(default)]
    pub bonus_potential: Option<f64>,
    #[serde(default)]
    pub diversity_score: Option<f64>,
    #[serde(default)]
    pub growth_score: Option<f64>,
    #[serde(default)]
    pub culture_score: Option<f64>,
    #[serde(default)]
    pub salary_increase_estimate: Option<f64>,
}

impl From<RawJobRecord> for JobOpportunity {
    fn from(raw: RawJobRecord) -> Self {
        // Median can be derived from a min/max range when absent
        let salary_median = raw.salary_median.or(match (raw.salary_min, raw.salary_max) {
            (Some(min), Some(max)) => Some((min + max) / 2.0),
            _ => None,
        });

        JobOpportunity {
            id: raw.id,
            title: raw.title,
            company: raw.company,
            location: raw.location,
            metro_area: raw.metro_area,
            salary_min: raw.salary_min,
            salary_max: raw.salary_max,
            salary_median,
            remote_friendly: raw.remote_friendly,
            description: raw.description,
            requirements: raw.requirements,
            benefits: raw.benefits,
            industry: raw.industry,
            company_size: raw.company_size,
            company_rating: raw.company_rating,
            experience_level: raw.experience_level,
            equity_offered: raw.equity_offered,
            bonus_potential: raw.bonus_potential,
            diversity_score: clamp_metric(raw.diversity_score),
            growth_score: clamp_metric(raw.growth_score),
            culture_score: clamp_metric(raw.culture_score),
            salary_increase_estimate: raw.salary_increase_estimate,
        }
    }
}

/// Missing company metrics default to a neutral 50 on the 0-100 scale
fn clamp_metric(value: Option<f64>) -> f64 {
    value.unwrap_or(50.0).clamp(0.0, 100.0)
}
