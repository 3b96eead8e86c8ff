//! Diversity-constrained selection of each tier's recommendation slate

use crate::config::SelectionConfig;
use crate::model::JobOpportunity;
use std::collections::HashSet;

/// Picks a bounded subset of a tier's score-sorted pool while maximizing
/// coverage of industry, company size, and location.
///
/// Two passes: the first admits candidates that introduce an unseen
/// attribute value (everyone qualifies until the floor is reached); the
/// second fills remaining slots purely by score. Output keeps the
/// diversity admits first, in their original relative order.
pub struct DiversitySelector {
    max_per_tier: usize,
    diversity_floor: usize,
}

impl DiversitySelector {
    pub fn new(config: &SelectionConfig) -> Self {
        Self {
            max_per_tier: config.max_recommendations_per_tier,
            diversity_floor: config.diversity_floor,
        }
    }

    pub fn with_limit(&self, max_per_tier: usize) -> Self {
        Self {
            max_per_tier,
            diversity_floor: self.diversity_floor,
        }
    }

    /// Select from `pool`, which must already be sorted by descending
    /// composite score. Returns indices into `pool`; duplicates (by job id)
    /// never appear in the result.
    pub fn select(&self, pool: &[&JobOpportunity]) -> Vec<usize> {
        let mut seen_ids: HashSet<&str> = HashSet::new();
        let mut seen_industries: HashSet<Option<&str>> = HashSet::new();
        let mut seen_sizes: HashSet<Option<&str>> = HashSet::new();
        let mut seen_locations: HashSet<String> = HashSet::new();

        let mut admitted: Vec<usize> = Vec::new();
        let mut skipped: Vec<usize> = Vec::new();

        // Pass 1: admit on new coverage (or unconditionally under the floor)
        for (index, job) in pool.iter().enumerate() {
            if admitted.len() >= self.max_per_tier {
                break;
            }
            if !seen_ids.insert(job.id.as_str()) {
                continue;
            }

            let industry = job.industry.as_deref();
            let size = job.company_size.map(size_key);
            let location = job.metro().to_lowercase();

            let adds_coverage = !seen_industries.contains(&industry)
                || !seen_sizes.contains(&size)
                || !seen_locations.contains(&location);

            if admitted.len() < self.diversity_floor || adds_coverage {
                seen_industries.insert(industry);
                seen_sizes.insert(size);
                seen_locations.insert(location);
                admitted.push(index);
            } else {
                skipped.push(index);
            }
        }

        // Pass 2: fill remaining slots from unused candidates, best score first
        for index in skipped {
            if admitted.len() >= self.max_per_tier {
                break;
            }
            admitted.push(index);
        }

        admitted
    }
}

fn size_key(size: crate::model::CompanySize) -> &'static str {
    match size {
        crate::model::CompanySize::Startup => "startup",
        crate::model::CompanySize::Small => "small",
        crate::model::CompanySize::Medium => "medium",
        crate::model::CompanySize::Large => "large",
        crate::model::CompanySize::Enterprise => "enterprise",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::CompanySize;

    fn job(id: &str, industry: &str, size: CompanySize, location: &str) -> JobOpportunity {
        JobOpportunity {
            id: id.to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            metro_area: None,
            salary_min: None,
            salary_max: None,
            salary_median: None,
            remote_friendly: false,
            description: String::new(),
            requirements: vec![],
            benefits: vec![],
            industry: Some(industry.to_string()),
            company_size: Some(size),
            company_rating: None,
            experience_level: None,
            equity_offered: false,
            bonus_potential: None,
            diversity_score: 50.0,
            growth_score: 50.0,
            culture_score: 50.0,
            salary_increase_estimate: None,
        }
    }

    fn selector() -> DiversitySelector {
        DiversitySelector::new(&Config::default().selection)
    }

    #[test]
    fn test_never_exceeds_limit() {
        let jobs: Vec<JobOpportunity> = (0..10)
            .map(|i| job(&format!("j{}", i), "tech", CompanySize::Medium, "Austin"))
            .collect();
        let refs: Vec<&JobOpportunity> = jobs.iter().collect();

        let selected = selector().select(&refs);
        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let jobs = vec![
            job("same", "tech", CompanySize::Medium, "Austin"),
            job("same", "finance", CompanySize::Small, "Denver"),
            job("other", "health", CompanySize::Large, "Boston"),
        ];
        let refs: Vec<&JobOpportunity> = jobs.iter().collect();

        let selected = selector().select(&refs);
        assert_eq!(selected, vec![0, 2]);
    }

    #[test]
    fn test_diversity_admit_beats_pure_score_order() {
        // Jobs 0-3 share every attribute; job 4 brings a new industry and
        // location. With the floor at 3, job 3 is skipped in pass 1 and
        // job 4 admitted ahead of it.
        let jobs = vec![
            job("a", "tech", CompanySize::Medium, "Austin"),
            job("b", "tech", CompanySize::Medium, "Austin"),
            job("c", "tech", CompanySize::Medium, "Austin"),
            job("d", "tech", CompanySize::Medium, "Austin"),
            job("e", "finance", CompanySize::Small, "Denver"),
        ];
        let refs: Vec<&JobOpportunity> = jobs.iter().collect();

        let selected = selector().select(&refs);
        // Pass 1: a, b, c (floor), e (new coverage); pass 2 fills d
        assert_eq!(selected, vec![0, 1, 2, 4, 3]);
    }

    #[test]
    fn test_fill_pass_respects_limit() {
        let jobs = vec![
            job("a", "tech", CompanySize::Medium, "Austin"),
            job("b", "tech", CompanySize::Medium, "Austin"),
            job("c", "tech", CompanySize::Medium, "Austin"),
            job("d", "tech", CompanySize::Medium, "Austin"),
            job("e", "tech", CompanySize::Medium, "Austin"),
            job("f", "tech", CompanySize::Medium, "Austin"),
        ];
        let refs: Vec<&JobOpportunity> = jobs.iter().collect();

        let selected = selector().with_limit(4).select(&refs);
        assert_eq!(selected.len(), 4);
        // No index may repeat
        let unique: HashSet<usize> = selected.iter().copied().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_small_pool_returns_everything() {
        let jobs = vec![
            job("a", "tech", CompanySize::Medium, "Austin"),
            job("b", "finance", CompanySize::Small, "Denver"),
        ];
        let refs: Vec<&JobOpportunity> = jobs.iter().collect();
        assert_eq!(selector().select(&refs), vec![0, 1]);
    }

    #[test]
    fn test_empty_pool() {
        let selected = selector().select(&[]);
        assert!(selected.is_empty());
    }
}
