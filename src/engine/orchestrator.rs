//! Request orchestration: one pass from criteria + job pool to tiered
//! recommendations

use crate::config::Config;
use crate::engine::classifier::{Classification, ClassificationOutcome, ExclusionReason, TierClassifier};
use crate::engine::gap_analyzer::SkillsGapAnalyzer;
use crate::engine::recommendation::{DiversityAnalysis, Recommendation, RecommendationSet};
use crate::engine::roadmap::PreparationRoadmapBuilder;
use crate::engine::scorer::{MultiFactorScorer, ScoreBreakdown};
use crate::engine::selector::DiversitySelector;
use crate::engine::strategy::ApplicationStrategyBuilder;
use crate::engine::summary::{TierSummary, TierSummaryReporter};
use crate::engine::taxonomy::{ScoringTaxonomy, SkillTaxonomy};
use crate::error::Result;
use crate::model::{
    tier_catalog, CandidateSkillProfile, JobOpportunity, SearchCriteria, Tier, TierSpec,
};
use crate::supply::{Cache, JobSupplier};
use chrono::Utc;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

/// One scored, classified candidate within a tier's pool
struct TierCandidate {
    job_index: usize,
    score: ScoreBreakdown,
    classification: Classification,
}

/// End-to-end recommendation engine. Stateless across requests: each call
/// flows criteria + job pool through score -> classify -> select -> analyze
/// -> build in a single pass. Multiple requests may run concurrently.
pub struct RecommendationEngine {
    config: Config,
    scorer: MultiFactorScorer,
    classifier: TierClassifier,
    selector: DiversitySelector,
    gap_analyzer: SkillsGapAnalyzer,
    strategy_builder: ApplicationStrategyBuilder,
    roadmap_builder: PreparationRoadmapBuilder,
    supplier: Box<dyn JobSupplier>,
    cache: Box<dyn Cache>,
}

impl RecommendationEngine {
    pub fn new(
        config: Config,
        supplier: Box<dyn JobSupplier>,
        cache: Box<dyn Cache>,
    ) -> Result<Self> {
        Self::with_taxonomies(
            config,
            ScoringTaxonomy::default(),
            SkillTaxonomy::default(),
            supplier,
            cache,
        )
    }

    /// Build with explicit taxonomies; tests inject smaller tables here
    pub fn with_taxonomies(
        config: Config,
        scoring_taxonomy: ScoringTaxonomy,
        skill_taxonomy: SkillTaxonomy,
        supplier: Box<dyn JobSupplier>,
        cache: Box<dyn Cache>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            scorer: MultiFactorScorer::new(config.scoring.clone(), scoring_taxonomy)?,
            classifier: TierClassifier::new(config.success_model.clone()),
            selector: DiversitySelector::new(&config.selection),
            gap_analyzer: SkillsGapAnalyzer::new(skill_taxonomy)?,
            strategy_builder: ApplicationStrategyBuilder::new(),
            roadmap_builder: PreparationRoadmapBuilder::new(),
            config,
            supplier,
            cache,
        })
    }

    /// Generate tiered recommendations for one request.
    ///
    /// Invalid criteria fail fast; a failed or timed-out supply call
    /// degrades to an empty result set instead of erroring. Per-job data
    /// holes are absorbed by defaults and never abort the batch.
    pub async fn generate_recommendations(
        &self,
        criteria: &SearchCriteria,
        profile: Option<&CandidateSkillProfile>,
        max_per_tier: Option<usize>,
    ) -> Result<RecommendationSet> {
        criteria.validate()?;

        let started = Instant::now();
        let per_tier_limit =
            max_per_tier.unwrap_or(self.config.selection.max_recommendations_per_tier);

        let cache_key = request_cache_key(criteria, per_tier_limit);
        if self.config.supply.enable_caching {
            if let Some(cached) = self.cache.get(&cache_key) {
                if let Ok(set) = serde_json::from_value::<RecommendationSet>(cached) {
                    info!("Serving recommendations from cache");
                    return Ok(set);
                }
            }
        }

        // The only blocking call in the request: bounded, never retried here
        let supply_timeout = Duration::from_secs(self.config.supply.timeout_secs);
        let jobs = match tokio::time::timeout(supply_timeout, self.supplier.search(criteria)).await
        {
            Ok(Ok(jobs)) => jobs,
            Ok(Err(e)) => {
                warn!("Job supply failed: {}", e);
                return Ok(RecommendationSet::degraded(e.to_string()));
            }
            Err(_) => {
                warn!(
                    "Job supply timed out after {}s",
                    self.config.supply.timeout_secs
                );
                return Ok(RecommendationSet::degraded(format!(
                    "job supply timed out after {}s",
                    self.config.supply.timeout_secs
                )));
            }
        };

        let total_supplied = jobs.len();
        let jobs = self.apply_hard_requirements(jobs, criteria);

        let mut set = RecommendationSet::new();
        set.total_jobs_considered = total_supplied;

        // Score and classify the whole pool, bucketing by tier
        let mut pools: BTreeMap<Tier, Vec<TierCandidate>> = BTreeMap::new();
        for (job_index, job) in jobs.iter().enumerate() {
            let score = self.scorer.score(job, criteria);
            match self.classifier.classify(job, criteria) {
                ClassificationOutcome::Assigned(classification) => {
                    pools
                        .entry(classification.tier)
                        .or_default()
                        .push(TierCandidate {
                            job_index,
                            score,
                            classification,
                        });
                }
                ClassificationOutcome::Excluded(ExclusionReason::BandGap) => {
                    debug!("Job {} excluded: increase falls between tier bands", job.id);
                    set.excluded_by_band_gap += 1;
                }
                ClassificationOutcome::Excluded(reason) => {
                    debug!("Job {} excluded: {:?}", job.id, reason);
                }
            }
        }

        let default_profile = CandidateSkillProfile::default();
        let profile = profile.unwrap_or(&default_profile);
        let selector = self.selector.with_limit(per_tier_limit);

        for (tier, mut pool) in pools {
            // Descending composite score; ids break ties deterministically
            pool.sort_by(|a, b| {
                b.score
                    .composite
                    .partial_cmp(&a.score.composite)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| jobs[a.job_index].id.cmp(&jobs[b.job_index].id))
            });

            let pool_jobs: Vec<&JobOpportunity> =
                pool.iter().map(|candidate| &jobs[candidate.job_index]).collect();
            let selected = selector.select(&pool_jobs);

            let recommendations: Vec<Recommendation> = selected
                .into_iter()
                .map(|pool_index| self.build_recommendation(&pool[pool_index], &jobs, profile))
                .collect();

            set.tiers.insert(tier, recommendations);
        }

        set.generated_at = Utc::now();
        set.processing_time_ms = started.elapsed().as_millis() as u64;

        info!(
            "Generated {} recommendations from {} jobs ({} excluded by band gap) in {}ms",
            set.total_recommendations(),
            total_supplied,
            set.excluded_by_band_gap,
            set.processing_time_ms
        );

        if self.config.supply.enable_caching {
            if let Ok(value) = serde_json::to_value(&set) {
                self.cache.put(
                    &cache_key,
                    value,
                    Duration::from_secs(self.config.supply.cache_ttl_secs),
                );
            }
        }

        Ok(set)
    }

    /// Per-tier aggregate statistics for presentation
    pub fn tier_summary(&self, set: &RecommendationSet) -> BTreeMap<String, TierSummary> {
        TierSummaryReporter::new().summarize(set)
    }

    /// Static tier catalog for display
    pub fn tier_catalog() -> Vec<&'static TierSpec> {
        tier_catalog()
    }

    /// Drop jobs violating the candidate's hard requirements. Missing data
    /// never disqualifies a job; only a positive violation does.
    fn apply_hard_requirements(
        &self,
        jobs: Vec<JobOpportunity>,
        criteria: &SearchCriteria,
    ) -> Vec<JobOpportunity> {
        let before = jobs.len();
        let jobs: Vec<JobOpportunity> = jobs
            .into_iter()
            .filter(|job| {
                if criteria.equity_required && !job.equity_offered {
                    return false;
                }
                if let (Some(min_rating), Some(rating)) =
                    (criteria.min_company_rating, job.company_rating)
                {
                    if rating < min_rating {
                        return false;
                    }
                }
                criteria.required_benefits.iter().all(|required| {
                    job.benefits
                        .iter()
                        .any(|listed| listed.to_lowercase().contains(&required.to_lowercase()))
                })
            })
            .collect();

        if jobs.len() < before {
            debug!(
                "Hard requirements removed {} of {} jobs",
                before - jobs.len(),
                before
            );
        }
        jobs
    }

    fn build_recommendation(
        &self,
        candidate: &TierCandidate,
        jobs: &[JobOpportunity],
        profile: &CandidateSkillProfile,
    ) -> Recommendation {
        let job = &jobs[candidate.job_index];
        let tier = candidate.classification.tier;

        let skill_gaps = self.gap_analyzer.analyze(job, profile);
        let strategy = self.strategy_builder.build(job, tier);
        let roadmap = self.roadmap_builder.build(job, tier, &skill_gaps);

        let mut culture_fit = (job.culture_score / 100.0).clamp(0.0, 1.0);
        if let Some(rating) = job.company_rating {
            culture_fit = (culture_fit + (rating / 5.0).clamp(0.0, 1.0)) / 2.0;
        }

        Recommendation {
            diversity_analysis: DiversityAnalysis::from_score(job.diversity_score),
            job: job.clone(),
            tier,
            success_probability: candidate.classification.success_probability(),
            salary_increase_potential: candidate.classification.salary_increase,
            score: candidate.score.clone(),
            skill_gaps,
            strategy,
            roadmap,
            culture_fit_score: culture_fit,
            advancement_potential_score: candidate.score.advancement / 100.0,
        }
    }
}

/// Stable cache key over the request inputs
fn request_cache_key(criteria: &SearchCriteria, per_tier_limit: usize) -> String {
    let serialized = serde_json::to_string(criteria).unwrap_or_default();
    let mut hasher = DefaultHasher::new();
    serialized.hash(&mut hasher);
    per_tier_limit.hash(&mut hasher);
    format!("recommendations:{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::criteria::{CareerField, ExperienceLevel};
    use crate::supply::{FailingJobSupplier, MemoryCache, NoopCache, StaticJobSupplier};

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            current_salary: 75_000.0,
            target_salary_increase: 0.25,
            career_field: CareerField::Technology,
            experience_level: ExperienceLevel::Mid,
            preferred_locations: vec!["Austin".to_string()],
            remote_acceptable: true,
            max_commute_minutes: None,
            required_benefits: vec![],
            company_size_preference: None,
            industry_preference: None,
            equity_required: false,
            min_company_rating: None,
        }
    }

    fn job(id: &str, median: f64) -> JobOpportunity {
        JobOpportunity {
            id: id.to_string(),
            title: "Software Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Austin".to_string(),
            metro_area: Some("Austin".to_string()),
            salary_min: None,
            salary_max: None,
            salary_median: Some(median),
            remote_friendly: true,
            description: "Python and SQL heavy role.".to_string(),
            requirements: vec!["python".to_string()],
            benefits: vec!["health insurance".to_string()],
            industry: Some("Technology".to_string()),
            company_size: None,
            company_rating: Some(4.2),
            experience_level: Some(ExperienceLevel::Mid),
            equity_offered: false,
            bonus_potential: None,
            diversity_score: 80.0,
            growth_score: 80.0,
            culture_score: 80.0,
            salary_increase_estimate: None,
        }
    }

    fn engine(jobs: Vec<JobOpportunity>) -> RecommendationEngine {
        RecommendationEngine::new(
            Config::default(),
            Box::new(StaticJobSupplier::new(jobs)),
            Box::new(NoopCache),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_invalid_criteria_rejected_before_pipeline() {
        let engine = engine(vec![]);
        let mut criteria = criteria();
        criteria.current_salary = -1.0;

        let result = engine.generate_recommendations(&criteria, None, None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_supply_failure_degrades_instead_of_erroring() {
        let engine = RecommendationEngine::new(
            Config::default(),
            Box::new(FailingJobSupplier),
            Box::new(NoopCache),
        )
        .unwrap();

        let set = engine
            .generate_recommendations(&criteria(), None, None)
            .await
            .unwrap();
        assert!(set.supply_degraded);
        assert_eq!(set.total_recommendations(), 0);
    }

    #[tokio::test]
    async fn test_recommendation_carries_full_bundle() {
        let engine = engine(vec![job("a", 90_000.0)]);
        let set = engine
            .generate_recommendations(&criteria(), None, None)
            .await
            .unwrap();

        let conservative = set.for_tier(Tier::Conservative);
        assert_eq!(conservative.len(), 1);

        let rec = &conservative[0];
        assert_eq!(rec.job.id, "a");
        assert!((rec.salary_increase_potential - 0.20).abs() < 1e-9);
        assert!((0.10..=0.95).contains(&rec.success_probability));
        assert!(!rec.skill_gaps.is_empty());
        assert!(!rec.strategy.timeline.is_empty());
        assert_eq!(rec.roadmap.total_duration, "2-4 weeks");
        assert!(rec.culture_fit_score > 0.0 && rec.culture_fit_score <= 1.0);
    }

    #[tokio::test]
    async fn test_band_gap_jobs_are_counted() {
        let engine = engine(vec![job("gap", 91_500.0)]);
        let set = engine
            .generate_recommendations(&criteria(), None, None)
            .await
            .unwrap();

        assert_eq!(set.total_recommendations(), 0);
        assert_eq!(set.excluded_by_band_gap, 1);
    }

    #[tokio::test]
    async fn test_equity_hard_requirement_filters_jobs() {
        let engine = engine(vec![job("no-equity", 90_000.0)]);
        let mut criteria = criteria();
        criteria.equity_required = true;

        let set = engine
            .generate_recommendations(&criteria, None, None)
            .await
            .unwrap();
        assert_eq!(set.total_recommendations(), 0);
    }

    #[tokio::test]
    async fn test_max_per_tier_override() {
        let jobs: Vec<JobOpportunity> = (0..8)
            .map(|i| job(&format!("j{}", i), 90_000.0))
            .collect();
        let engine = engine(jobs);

        let set = engine
            .generate_recommendations(&criteria(), None, Some(2))
            .await
            .unwrap();
        assert_eq!(set.for_tier(Tier::Conservative).len(), 2);
    }

    #[tokio::test]
    async fn test_cache_round_trip() {
        let engine = RecommendationEngine::new(
            Config::default(),
            Box::new(StaticJobSupplier::new(vec![job("a", 90_000.0)])),
            Box::new(MemoryCache::new()),
        )
        .unwrap();

        let first = engine
            .generate_recommendations(&criteria(), None, None)
            .await
            .unwrap();
        let second = engine
            .generate_recommendations(&criteria(), None, None)
            .await
            .unwrap();

        assert_eq!(first.total_recommendations(), second.total_recommendations());
        assert_eq!(first.generated_at, second.generated_at);
    }
}
