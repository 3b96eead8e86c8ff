//! Tier classification: salary-increase bands gated by success likelihood

use crate::config::SuccessModelConfig;
use crate::model::criteria::{CareerField, ExperienceLevel};
use crate::model::{JobOpportunity, SearchCriteria, Tier};
use serde::{Deserialize, Serialize};

/// Result of classifying one job into a tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub tier: Tier,
    pub salary_increase: f64,
    pub success_factors: f64,
}

impl Classification {
    /// Heuristic success estimate exposed on recommendations,
    /// clamped to [0.10, 0.95]
    pub fn success_probability(&self) -> f64 {
        self.success_factors.clamp(0.10, 0.95)
    }
}

/// Why a job was excluded from every tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Increase landed strictly between tier bands (tracked as a metric)
    BandGap,
    /// Increase below the conservative band's floor
    BelowMinimumIncrease,
    /// Increase fit a band but the success floor was not met
    SuccessFloor,
    /// Neither salary data nor an increase estimate was available
    NoSalarySignal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassificationOutcome {
    Assigned(Classification),
    Excluded(ExclusionReason),
}

impl ClassificationOutcome {
    pub fn assigned(&self) -> Option<&Classification> {
        match self {
            ClassificationOutcome::Assigned(classification) => Some(classification),
            ClassificationOutcome::Excluded(_) => None,
        }
    }
}

/// Assigns each scored job to exactly one tier, or excludes it. Pure and
/// deterministic: identical (job, criteria) inputs always yield the same
/// outcome. Band boundaries live on [`crate::model::TierSpec`]; the gaps
/// between bands are intentional and preserved.
pub struct TierClassifier {
    weights: SuccessModelConfig,
}

impl TierClassifier {
    pub fn new(weights: SuccessModelConfig) -> Self {
        Self { weights }
    }

    pub fn classify(
        &self,
        job: &JobOpportunity,
        criteria: &SearchCriteria,
    ) -> ClassificationOutcome {
        let increase = match self.salary_increase(job, criteria) {
            Some(increase) => increase,
            None => return ClassificationOutcome::Excluded(ExclusionReason::NoSalarySignal),
        };

        let success_factors = self.success_factors(job, criteria);

        // Bands are evaluated in order; the first containing band wins
        let mut fit_a_band = false;
        for tier in Tier::all() {
            let spec = tier.spec();
            if spec.contains_increase(increase) {
                fit_a_band = true;
                if success_factors >= spec.min_success_probability {
                    return ClassificationOutcome::Assigned(Classification {
                        tier,
                        salary_increase: increase,
                        success_factors,
                    });
                }
            }
        }

        let reason = if fit_a_band {
            ExclusionReason::SuccessFloor
        } else if increase < Tier::Conservative.spec().min_salary_increase {
            ExclusionReason::BelowMinimumIncrease
        } else {
            // Stretch is open-ended above, so anything here sits strictly
            // between two bands
            ExclusionReason::BandGap
        };
        ClassificationOutcome::Excluded(reason)
    }

    /// Fractional increase of the job's median salary over the candidate's
    /// current salary, falling back to the supplier's own estimate
    fn salary_increase(&self, job: &JobOpportunity, criteria: &SearchCriteria) -> Option<f64> {
        match job.salary_median {
            Some(median) => Some((median - criteria.current_salary) / criteria.current_salary),
            None => job.salary_increase_estimate,
        }
    }

    /// Weighted mean of seven [0, 1] signals
    pub fn success_factors(&self, job: &JobOpportunity, criteria: &SearchCriteria) -> f64 {
        let weights = &self.weights;

        let weighted_sum = self.experience_signal(job, criteria) * weights.experience_weight
            + self.field_signal(job, criteria) * weights.field_weight
            + self.company_size_signal(job, criteria) * weights.company_size_weight
            + self.location_signal(job, criteria) * weights.location_weight
            + (job.diversity_score / 100.0).clamp(0.0, 1.0) * weights.diversity_weight
            + (job.growth_score / 100.0).clamp(0.0, 1.0) * weights.growth_weight
            + (job.culture_score / 100.0).clamp(0.0, 1.0) * weights.culture_weight;

        weighted_sum / weights.weight_sum()
    }

    fn experience_signal(&self, job: &JobOpportunity, criteria: &SearchCriteria) -> f64 {
        let job_level = job
            .experience_level
            .unwrap_or_else(|| infer_level_from_title(&job.title));

        if job_level == criteria.experience_level {
            0.9
        } else if job_level.rank() == criteria.experience_level.rank() + 1 {
            // One-step upgrade: harder, still plausible
            0.7
        } else {
            0.4
        }
    }

    fn field_signal(&self, job: &JobOpportunity, criteria: &SearchCriteria) -> f64 {
        match field_of_job(job) {
            Some(field) if field == criteria.career_field => 0.9,
            _ => 0.6,
        }
    }

    fn company_size_signal(&self, job: &JobOpportunity, criteria: &SearchCriteria) -> f64 {
        match criteria.company_size_preference {
            None => 0.7,
            Some(preferred) => {
                if job.company_size == Some(preferred) {
                    0.8
                } else {
                    0.6
                }
            }
        }
    }

    fn location_signal(&self, job: &JobOpportunity, criteria: &SearchCriteria) -> f64 {
        if criteria.prefers_location(job.metro()) {
            0.9
        } else if job.remote_friendly && criteria.remote_acceptable {
            0.8
        } else {
            0.6
        }
    }
}

/// Best-effort level inference when the posting does not state one
fn infer_level_from_title(title: &str) -> ExperienceLevel {
    let title = title.to_lowercase();

    const EXECUTIVE: [&str; 5] = ["director", "vp", "vice president", "chief", "head of"];
    const SENIOR: [&str; 4] = ["senior", "lead", "principal", "staff"];
    const ENTRY: [&str; 4] = ["junior", "entry", "associate", "intern"];

    if EXECUTIVE.iter().any(|kw| title.contains(kw)) {
        ExperienceLevel::Executive
    } else if SENIOR.iter().any(|kw| title.contains(kw)) {
        ExperienceLevel::Senior
    } else if ENTRY.iter().any(|kw| title.contains(kw)) {
        ExperienceLevel::Entry
    } else {
        ExperienceLevel::Mid
    }
}

/// Map a posting's industry string onto a career field
fn field_of_job(job: &JobOpportunity) -> Option<CareerField> {
    let industry = job.industry.as_deref()?.to_lowercase();

    let table: [(&[&str], CareerField); 7] = [
        (
            &["tech", "software", "saas", "internet", "information"],
            CareerField::Technology,
        ),
        (
            &["financ", "bank", "insurance", "investment"],
            CareerField::Finance,
        ),
        (
            &["health", "medic", "pharma", "biotech", "hospital"],
            CareerField::Healthcare,
        ),
        (&["marketing", "advertis", "media"], CareerField::Marketing),
        (&["sales", "retail", "commerce"], CareerField::Sales),
        (
            &["operations", "logistics", "manufactur", "supply"],
            CareerField::Operations,
        ),
        (
            &["educat", "university", "school", "edtech"],
            CareerField::Education,
        ),
    ];

    for (keywords, field) in table {
        if keywords.iter().any(|kw| industry.contains(kw)) {
            return Some(field);
        }
    }
    Some(CareerField::Other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::criteria::CompanySize;

    fn classifier() -> TierClassifier {
        TierClassifier::new(Config::default().success_model)
    }

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

    /// Strong-match job: every signal lands on its best value, so
    /// success factors stay high regardless of weight tweaks
    fn strong_job(median: f64) -> JobOpportunity {
        JobOpportunity {
            id: "strong".to_string(),
            title: "Software Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Austin".to_string(),
            metro_area: Some("Austin".to_string()),
            salary_min: None,
            salary_max: None,
            salary_median: Some(median),
            remote_friendly: true,
            description: String::new(),
            requirements: vec![],
            benefits: vec![],
            industry: Some("Technology".to_string()),
            company_size: Some(CompanySize::Medium),
            company_rating: None,
            experience_level: Some(ExperienceLevel::Mid),
            equity_offered: false,
            bonus_potential: None,
            diversity_score: 80.0,
            growth_score: 80.0,
            culture_score: 80.0,
            salary_increase_estimate: None,
        }
    }

    /// Weak-match job: mismatched level and field, mediocre company scores
    fn weak_job(median: f64) -> JobOpportunity {
        let mut job = strong_job(median);
        job.id = "weak".to_string();
        job.experience_level = Some(ExperienceLevel::Executive);
        job.industry = Some("Hospitality".to_string());
        job.metro_area = Some("Boise".to_string());
        job.location = "Boise".to_string();
        job.remote_friendly = false;
        job.diversity_score = 40.0;
        job.growth_score = 40.0;
        job.culture_score = 40.0;
        job
    }

    #[test]
    fn test_conservative_assignment_at_band_edge() {
        // 90k over 75k is exactly a 20% increase: the inclusive upper edge
        let outcome = classifier().classify(&strong_job(90_000.0), &criteria());
        let classification = outcome.assigned().expect("should classify");
        assert_eq!(classification.tier, Tier::Conservative);
        assert!((classification.salary_increase - 0.20).abs() < 1e-12);
    }

    #[test]
    fn test_optimal_assignment() {
        let outcome = classifier().classify(&strong_job(97_500.0), &criteria());
        assert_eq!(outcome.assigned().unwrap().tier, Tier::Optimal);
    }

    #[test]
    fn test_stretch_assignment_for_weak_match() {
        // 120% increase, success factors low but above the 0.30 stretch floor
        let outcome = classifier().classify(&weak_job(165_000.0), &criteria());
        let classification = outcome.assigned().expect("should classify");
        assert_eq!(classification.tier, Tier::Stretch);
        assert!(classification.success_factors < 0.70);
    }

    #[test]
    fn test_band_gap_exclusion() {
        // 22% increase falls in the 20-25% gap between bands
        let outcome = classifier().classify(&strong_job(91_500.0), &criteria());
        assert_eq!(
            outcome,
            ClassificationOutcome::Excluded(ExclusionReason::BandGap)
        );
    }

    #[test]
    fn test_success_floor_exclusion() {
        // 18% increase fits conservative, but a weak match misses its 0.70 floor
        let outcome = classifier().classify(&weak_job(88_500.0), &criteria());
        assert_eq!(
            outcome,
            ClassificationOutcome::Excluded(ExclusionReason::SuccessFloor)
        );
    }

    #[test]
    fn test_below_band_exclusion() {
        let outcome = classifier().classify(&strong_job(80_000.0), &criteria());
        assert_eq!(
            outcome,
            ClassificationOutcome::Excluded(ExclusionReason::BelowMinimumIncrease)
        );
    }

    #[test]
    fn test_missing_salary_falls_back_to_estimate() {
        let mut job = strong_job(0.0);
        job.salary_median = None;
        job.salary_increase_estimate = Some(0.27);
        let outcome = classifier().classify(&job, &criteria());
        assert_eq!(outcome.assigned().unwrap().tier, Tier::Optimal);
    }

    #[test]
    fn test_no_salary_signal_exclusion() {
        let mut job = strong_job(0.0);
        job.salary_median = None;
        job.salary_increase_estimate = None;
        let outcome = classifier().classify(&job, &criteria());
        assert_eq!(
            outcome,
            ClassificationOutcome::Excluded(ExclusionReason::NoSalarySignal)
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = classifier();
        let job = strong_job(97_500.0);
        let criteria = criteria();
        let first = classifier.classify(&job, &criteria);
        let second = classifier.classify(&job, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_success_probability_is_clamped() {
        let classification = Classification {
            tier: Tier::Stretch,
            salary_increase: 0.5,
            success_factors: 0.05,
        };
        assert_eq!(classification.success_probability(), 0.10);

        let classification = Classification {
            success_factors: 0.99,
            ..classification
        };
        assert_eq!(classification.success_probability(), 0.95);
    }

    #[test]
    fn test_level_inference_from_title() {
        assert_eq!(
            infer_level_from_title("Senior Data Engineer"),
            ExperienceLevel::Senior
        );
        assert_eq!(
            infer_level_from_title("Director of Engineering"),
            ExperienceLevel::Executive
        );
        assert_eq!(
            infer_level_from_title("Junior Analyst"),
            ExperienceLevel::Entry
        );
        assert_eq!(infer_level_from_title("Data Engineer"), ExperienceLevel::Mid);
    }
}
