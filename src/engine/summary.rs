//! Per-tier aggregate statistics for presentation

use crate::engine::recommendation::RecommendationSet;
use crate::model::Tier;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSummary {
    pub tier: Tier,
    pub count: usize,

    /// Average salary-increase potential, in percent
    pub avg_salary_increase_pct: f64,

    /// Average success probability, in percent
    pub avg_success_probability_pct: f64,

    /// Most frequent roadmap duration bucket; empty for an empty tier
    pub typical_preparation_time: String,

    pub industries: Vec<String>,
    pub company_sizes: Vec<String>,
    pub description: String,
}

pub struct TierSummaryReporter;

impl TierSummaryReporter {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate every tier of a result set. Empty tiers report zeroed
    /// defaults rather than erroring.
    pub fn summarize(&self, set: &RecommendationSet) -> BTreeMap<String, TierSummary> {
        let mut summaries = BTreeMap::new();
        for tier in Tier::all() {
            summaries.insert(tier.name().to_string(), self.summarize_tier(set, tier));
        }
        summaries
    }

    fn summarize_tier(&self, set: &RecommendationSet, tier: Tier) -> TierSummary {
        let recommendations = set.for_tier(tier);
        let count = recommendations.len();

        if count == 0 {
            return TierSummary {
                tier,
                count: 0,
                avg_salary_increase_pct: 0.0,
                avg_success_probability_pct: 0.0,
                typical_preparation_time: String::new(),
                industries: vec![],
                company_sizes: vec![],
                description: tier.spec().description.to_string(),
            };
        }

        let avg_salary_increase_pct = recommendations
            .iter()
            .map(|rec| rec.salary_increase_potential * 100.0)
            .sum::<f64>()
            / count as f64;

        let avg_success_probability_pct = recommendations
            .iter()
            .map(|rec| rec.success_probability * 100.0)
            .sum::<f64>()
            / count as f64;

        let industries: BTreeSet<String> = recommendations
            .iter()
            .filter_map(|rec| rec.job.industry.clone())
            .collect();

        let company_sizes: BTreeSet<String> = recommendations
            .iter()
            .filter_map(|rec| rec.job.company_size.map(|size| size.to_string()))
            .collect();

        TierSummary {
            tier,
            count,
            avg_salary_increase_pct,
            avg_success_probability_pct,
            typical_preparation_time: mode_duration(recommendations),
            industries: industries.into_iter().collect(),
            company_sizes: company_sizes.into_iter().collect(),
            description: tier.spec().description.to_string(),
        }
    }
}

impl Default for TierSummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Most frequent roadmap duration bucket. Ties resolve to the bucket seen
/// first, keeping the result deterministic.
fn mode_duration(recommendations: &[crate::engine::recommendation::Recommendation]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for rec in recommendations {
        let bucket = rec.roadmap.total_duration.as_str();
        match counts.iter_mut().find(|(name, _)| *name == bucket) {
            Some((_, count)) => *count += 1,
            None => counts.push((bucket, 1)),
        }
    }

    counts
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(name, _)| name.to_string())
        .unwrap_or_default()
}
