//! Recommendation output types: the engine's per-job and per-request results

use crate::engine::gap_analyzer::SkillGap;
use crate::engine::roadmap::PreparationRoadmap;
use crate::engine::scorer::ScoreBreakdown;
use crate::engine::strategy::ApplicationStrategy;
use crate::model::{JobOpportunity, Tier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Qualitative read on the employer's diversity posture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversityAnalysis {
    pub company_diversity_score: f64,
    pub rating: String,
    pub note: String,
}

impl DiversityAnalysis {
    pub fn from_score(score: f64) -> Self {
        let (rating, note) = if score >= 75.0 {
            (
                "strong",
                "Employer shows strong, visible diversity commitments",
            )
        } else if score >= 50.0 {
            (
                "moderate",
                "Employer shows average diversity signals for its industry",
            )
        } else {
            (
                "limited",
                "Few diversity signals; worth asking about directly in interviews",
            )
        };
        Self {
            company_diversity_score: score,
            rating: rating.to_string(),
            note: note.to_string(),
        }
    }
}

/// One recommended opportunity with everything needed to act on it.
/// Created once per (job, tier, criteria); immutable after creation and
/// scoped to a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub job: JobOpportunity,
    pub tier: Tier,

    /// Clamped to [0.10, 0.95]
    pub success_probability: f64,

    /// Fractional increase of the job's median over the current salary
    pub salary_increase_potential: f64,

    pub score: ScoreBreakdown,
    pub skill_gaps: Vec<SkillGap>,
    pub strategy: ApplicationStrategy,
    pub roadmap: PreparationRoadmap,
    pub diversity_analysis: DiversityAnalysis,

    /// [0, 1] blend of culture score and company rating
    pub culture_fit_score: f64,

    /// [0, 1], derived from the advancement sub-score
    pub advancement_potential_score: f64,
}

/// Full result of one recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// All three tiers are always present, possibly with empty lists
    pub tiers: BTreeMap<Tier, Vec<Recommendation>>,

    pub total_jobs_considered: usize,

    /// Jobs whose salary increase fell strictly between tier bands
    pub excluded_by_band_gap: usize,

    /// Set when the job supply failed or timed out; tiers are empty then
    pub supply_degraded: bool,
    pub supply_error: Option<String>,

    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
}

impl RecommendationSet {
    pub fn new() -> Self {
        let mut tiers = BTreeMap::new();
        for tier in Tier::all() {
            tiers.insert(tier, Vec::new());
        }
        Self {
            tiers,
            total_jobs_considered: 0,
            excluded_by_band_gap: 0,
            supply_degraded: false,
            supply_error: None,
            generated_at: Utc::now(),
            processing_time_ms: 0,
        }
    }

    /// Empty result representing a failed/timed-out supply call
    pub fn degraded(error: String) -> Self {
        let mut set = Self::new();
        set.supply_degraded = true;
        set.supply_error = Some(error);
        set
    }

    pub fn for_tier(&self, tier: Tier) -> &[Recommendation] {
        self.tiers.get(&tier).map(|recs| recs.as_slice()).unwrap_or(&[])
    }

    pub fn total_recommendations(&self) -> usize {
        self.tiers.values().map(|recs| recs.len()).sum()
    }
}

impl Default for RecommendationSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_has_all_tiers() {
        let set = RecommendationSet::new();
        assert_eq!(set.tiers.len(), 3);
        assert!(set.for_tier(Tier::Stretch).is_empty());
        assert_eq!(set.total_recommendations(), 0);
    }

    #[test]
    fn test_degraded_set_carries_error() {
        let set = RecommendationSet::degraded("supplier timed out".to_string());
        assert!(set.supply_degraded);
        assert_eq!(set.supply_error.as_deref(), Some("supplier timed out"));
        assert_eq!(set.total_recommendations(), 0);
    }

    #[test]
    fn test_diversity_analysis_bands() {
        assert_eq!(DiversityAnalysis::from_score(80.0).rating, "strong");
        assert_eq!(DiversityAnalysis::from_score(60.0).rating, "moderate");
        assert_eq!(DiversityAnalysis::from_score(30.0).rating, "limited");
    }
}
