//! Integration tests for the career compass engine

use async_trait::async_trait;
use career_compass::config::Config;
use career_compass::engine::{
    MultiFactorScorer, RecommendationEngine, ScoringTaxonomy, TierClassifier,
};
use career_compass::error::Result;
use career_compass::model::criteria::{CareerField, ExperienceLevel};
use career_compass::model::{JobOpportunity, SearchCriteria, Tier};
use career_compass::supply::{JobSupplier, MemoryCache, NoopCache, StaticJobSupplier};

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

fn base_job(id: &str, median: Option<f64>) -> JobOpportunity {
    JobOpportunity {
        id: id.to_string(),
        title: "Software Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Austin".to_string(),
        metro_area: Some("Austin".to_string()),
        salary_min: None,
        salary_max: None,
        salary_median: median,
        remote_friendly: true,
        description: "Build services in Python with SQL-backed storage.".to_string(),
        requirements: vec!["python".to_string(), "sql".to_string()],
        benefits: vec!["health insurance".to_string(), "401k".to_string()],
        industry: Some("Technology".to_string()),
        company_size: None,
        company_rating: None,
        experience_level: Some(ExperienceLevel::Mid),
        equity_offered: false,
        bonus_potential: None,
        diversity_score: 60.0,
        growth_score: 60.0,
        culture_score: 60.0,
        salary_increase_estimate: None,
    }
}

/// Job A: 20% increase, success factors ~0.74 -> conservative
fn job_a() -> JobOpportunity {
    base_job("job-a", Some(90_000.0))
}

/// Job B: 30% increase, success factors ~0.55 -> optimal
fn job_b() -> JobOpportunity {
    let mut job = base_job("job-b", Some(97_500.0));
    job.experience_level = Some(ExperienceLevel::Executive);
    job.metro_area = Some("Seattle".to_string());
    job.location = "Seattle".to_string();
    job.diversity_score = 35.0;
    job.growth_score = 35.0;
    job.culture_score = 35.0;
    job
}

/// Job C: 120% increase, success factors ~0.40 -> stretch
fn job_c() -> JobOpportunity {
    let mut job = base_job("job-c", Some(165_000.0));
    job.experience_level = Some(ExperienceLevel::Executive);
    job.industry = Some("Hospitality".to_string());
    job.metro_area = Some("Boise".to_string());
    job.location = "Boise".to_string();
    job.remote_friendly = false;
    job.diversity_score = 17.0;
    job.growth_score = 17.0;
    job.culture_score = 16.0;
    job
}

/// Job D: 22% increase, lands in the gap between bands -> excluded
fn job_d() -> JobOpportunity {
    base_job("job-d", Some(91_500.0))
}

fn engine_with(jobs: Vec<JobOpportunity>) -> RecommendationEngine {
    RecommendationEngine::new(
        Config::default(),
        Box::new(StaticJobSupplier::new(jobs)),
        Box::new(NoopCache),
    )
    .unwrap()
}

#[tokio::test]
async fn test_end_to_end_tier_partitioning() {
    let engine = engine_with(vec![job_a(), job_b(), job_c(), job_d()]);
    let set = engine
        .generate_recommendations(&criteria(), None, None)
        .await
        .unwrap();

    let conservative = set.for_tier(Tier::Conservative);
    assert_eq!(conservative.len(), 1);
    assert_eq!(conservative[0].job.id, "job-a");
    assert!((conservative[0].salary_increase_potential - 0.20).abs() < 1e-9);

    let optimal = set.for_tier(Tier::Optimal);
    assert_eq!(optimal.len(), 1);
    assert_eq!(optimal[0].job.id, "job-b");
    assert!((optimal[0].salary_increase_potential - 0.30).abs() < 1e-9);

    let stretch = set.for_tier(Tier::Stretch);
    assert_eq!(stretch.len(), 1);
    assert_eq!(stretch[0].job.id, "job-c");
    assert!((stretch[0].salary_increase_potential - 1.20).abs() < 1e-9);

    // Job D qualifies for no tier and is tracked as a band-gap exclusion
    assert_eq!(set.total_recommendations(), 3);
    assert_eq!(set.excluded_by_band_gap, 1);
    assert_eq!(set.total_jobs_considered, 4);
}

#[tokio::test]
async fn test_tier_invariants_hold_for_every_recommendation() {
    let engine = engine_with(vec![job_a(), job_b(), job_c(), job_d()]);
    let set = engine
        .generate_recommendations(&criteria(), None, None)
        .await
        .unwrap();

    for tier in Tier::all() {
        let spec = tier.spec();
        for rec in set.for_tier(tier) {
            assert_eq!(rec.tier, tier);
            assert!(
                spec.contains_increase(rec.salary_increase_potential),
                "{} increase {} outside its band",
                rec.job.id,
                rec.salary_increase_potential
            );
            assert!((0.10..=0.95).contains(&rec.success_probability));
        }
    }
}

#[test]
fn test_missing_salary_scores_neutral() {
    let scorer = MultiFactorScorer::new(
        Config::default().scoring,
        ScoringTaxonomy::default(),
    )
    .unwrap();

    let breakdown = scorer.score(&base_job("no-salary", None), &criteria());
    assert_eq!(breakdown.salary, 50.0);
}

#[test]
fn test_classifier_is_pure_and_deterministic() {
    let classifier = TierClassifier::new(Config::default().success_model);
    let job = job_b();
    let criteria = criteria();

    let first = classifier.classify(&job, &criteria);
    let second = classifier.classify(&job, &criteria);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_selection_is_bounded_and_duplicate_free() {
    // Twelve conservative-band jobs, two sharing an id
    let mut jobs: Vec<JobOpportunity> = (0..11)
        .map(|i| {
            let mut job = job_a();
            job.id = format!("dup-{}", i.min(9));
            job
        })
        .collect();
    jobs.push(job_a());

    let engine = engine_with(jobs);
    let set = engine
        .generate_recommendations(&criteria(), None, None)
        .await
        .unwrap();

    let conservative = set.for_tier(Tier::Conservative);
    assert!(conservative.len() <= 5);

    let mut ids: Vec<&str> = conservative.iter().map(|rec| rec.job.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), conservative.len());
}

#[tokio::test]
async fn test_skill_gaps_always_recompute_gap_size() {
    let engine = engine_with(vec![job_a()]);
    let set = engine
        .generate_recommendations(&criteria(), None, None)
        .await
        .unwrap();

    let rec = &set.for_tier(Tier::Conservative)[0];
    assert!(!rec.skill_gaps.is_empty());
    for gap in &rec.skill_gaps {
        assert!((gap.gap_size() - (gap.required_level - gap.current_level)).abs() < 1e-12);
    }
}

#[tokio::test]
async fn test_empty_tier_summary_reports_zero_without_raising() {
    let engine = engine_with(vec![]);
    let set = engine
        .generate_recommendations(&criteria(), None, None)
        .await
        .unwrap();

    let summaries = engine.tier_summary(&set);
    for tier in Tier::all() {
        let summary = &summaries[tier.name()];
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_salary_increase_pct, 0.0);
        assert!(summary.industries.is_empty());
    }
}

#[tokio::test]
async fn test_recommendation_round_trip_preserves_identity() {
    let engine = engine_with(vec![job_b()]);
    let set = engine
        .generate_recommendations(&criteria(), None, None)
        .await
        .unwrap();

    let original = &set.for_tier(Tier::Optimal)[0];
    let serialized = serde_json::to_string(original).unwrap();
    let restored: career_compass::engine::Recommendation =
        serde_json::from_str(&serialized).unwrap();

    assert_eq!(restored.job.id, original.job.id);
    assert_eq!(restored.tier, original.tier);
    assert_eq!(restored.success_probability, original.success_probability);
}

#[test]
fn test_tier_catalog_is_static_and_complete() {
    let catalog = RecommendationEngine::tier_catalog();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog[0].min_salary_increase, 0.15);
    assert_eq!(catalog[1].min_salary_increase, 0.25);
    assert_eq!(catalog[2].min_salary_increase, 0.35);
    assert_eq!(catalog[2].max_salary_increase, None);
}

/// Supplier that never answers within the request budget
struct HangingSupplier;

#[async_trait]
impl JobSupplier for HangingSupplier {
    async fn search(&self, _criteria: &SearchCriteria) -> Result<Vec<JobOpportunity>> {
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        Ok(vec![])
    }
}

#[tokio::test]
async fn test_supply_timeout_degrades_gracefully() {
    let mut config = Config::default();
    config.supply.timeout_secs = 0;

    let engine = RecommendationEngine::new(
        config,
        Box::new(HangingSupplier),
        Box::new(NoopCache),
    )
    .unwrap();

    let set = engine
        .generate_recommendations(&criteria(), None, None)
        .await
        .unwrap();
    assert!(set.supply_degraded);
    assert!(set.supply_error.as_ref().unwrap().contains("timed out"));
    assert_eq!(set.total_recommendations(), 0);
}

#[tokio::test]
async fn test_identical_requests_hit_the_cache() {
    let engine = RecommendationEngine::new(
        Config::default(),
        Box::new(StaticJobSupplier::new(vec![job_a(), job_b()])),
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

    // A cache hit returns the stored result, timestamps included
    assert_eq!(first.generated_at, second.generated_at);
    assert_eq!(first.total_recommendations(), second.total_recommendations());
}
