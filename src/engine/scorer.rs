//! Multi-factor opportunity scoring

use crate::config::ScoringConfig;
use crate::engine::taxonomy::ScoringTaxonomy;
use crate::error::{CareerCompassError, Result};
use crate::model::{JobOpportunity, SearchCriteria};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

/// Composite 0-100 score with all four sub-scores retained for transparency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub composite: f64,
    pub salary: f64,
    pub advancement: f64,
    pub diversity: f64,
    pub benefits: f64,
}

/// Scores a (job, criteria) pair from four weighted sub-scores:
/// salary, advancement, company diversity/quality, and benefits/work-life.
/// Pure function of its inputs; keyword tables are injected configuration.
pub struct MultiFactorScorer {
    config: ScoringConfig,
    taxonomy: ScoringTaxonomy,
    seniority_matcher: AhoCorasick,
    growth_matcher: AhoCorasick,
    work_life_matcher: AhoCorasick,
}

impl MultiFactorScorer {
    pub fn new(config: ScoringConfig, taxonomy: ScoringTaxonomy) -> Result<Self> {
        let seniority_matcher = build_matcher(&taxonomy.seniority_titles)?;
        let growth_matcher = build_matcher(&taxonomy.growth_keywords)?;
        let work_life_matcher = build_matcher(&taxonomy.work_life_keywords)?;

        Ok(Self {
            config,
            taxonomy,
            seniority_matcher,
            growth_matcher,
            work_life_matcher,
        })
    }

    /// Score one opportunity against the candidate's criteria
    pub fn score(&self, job: &JobOpportunity, criteria: &SearchCriteria) -> ScoreBreakdown {
        let salary = self.salary_sub_score(job, criteria);
        let advancement = self.advancement_sub_score(job);
        let diversity = job.diversity_score;
        let benefits = self.benefits_sub_score(job);

        let composite = salary * self.config.salary_weight
            + advancement * self.config.advancement_weight
            + diversity * self.config.diversity_weight
            + benefits * self.config.benefits_weight;

        ScoreBreakdown {
            composite,
            salary,
            advancement,
            diversity,
            benefits,
        }
    }

    /// Step function of the median-to-current salary ratio.
    /// Missing salary data scores a neutral 50.
    fn salary_sub_score(&self, job: &JobOpportunity, criteria: &SearchCriteria) -> f64 {
        let median = match job.salary_median {
            Some(median) => median,
            None => return 50.0,
        };

        let ratio = median / criteria.current_salary;
        if ratio >= 1.45 {
            100.0
        } else if ratio >= 1.30 {
            90.0
        } else if ratio >= 1.15 {
            80.0
        } else if ratio >= 1.05 {
            60.0
        } else {
            30.0
        }
    }

    fn advancement_sub_score(&self, job: &JobOpportunity) -> f64 {
        let mut score: f64 = 50.0;

        if self.seniority_matcher.is_match(&job.title) {
            score += 20.0;
        }
        if self.growth_matcher.is_match(&job.description) {
            score += 15.0;
        }
        if job.equity_offered {
            score += 15.0;
        }
        if job.bonus_potential.unwrap_or(0.0) > 0.0 {
            score += 10.0;
        }

        score.min(100.0)
    }

    fn benefits_sub_score(&self, job: &JobOpportunity) -> f64 {
        let mut score: f64 = 50.0;
        let benefits_lower: Vec<String> =
            job.benefits.iter().map(|b| b.to_lowercase()).collect();

        // +5 per recognized key benefit, each counted at most once
        for benefit in &self.taxonomy.key_benefits {
            let present = benefits_lower.iter().any(|listed| {
                benefit.patterns.iter().any(|pattern| listed.contains(pattern))
            });
            if present {
                score += 5.0;
            }
        }

        let work_life_text = format!("{}\n{}", job.description, benefits_lower.join("\n"));
        if self.work_life_matcher.is_match(&work_life_text) {
            score += 15.0;
        }
        if job.remote_friendly {
            score += 10.0;
        }

        score.min(100.0)
    }
}

fn build_matcher(patterns: &[&str]) -> Result<AhoCorasick> {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(patterns)
        .map_err(|e| {
            CareerCompassError::Configuration(format!("Failed to build keyword matcher: {}", e))
        })
}
