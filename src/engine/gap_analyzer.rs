//! Skills-gap analysis between a job's requirements and the candidate profile

use crate::engine::taxonomy::{SkillCategory, SkillTaxonomy};
use crate::error::{CareerCompassError, Result};
use crate::model::{CandidateSkillProfile, JobOpportunity};
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    High,
    Medium,
    Low,
}

impl GapPriority {
    pub fn from_gap(gap: f64) -> Self {
        if gap > 0.4 {
            GapPriority::High
        } else if gap > 0.2 {
            GapPriority::Medium
        } else {
            GapPriority::Low
        }
    }
}

/// One skill the role asks for, compared against the candidate's level.
/// The gap itself is always recomputed from the two levels rather than
/// stored, so the fields can never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub category: SkillCategory,
    pub current_level: f64,
    pub required_level: f64,
    pub priority: GapPriority,
    pub learning_time_estimate: String,
    pub resources: Vec<String>,
}

impl SkillGap {
    pub fn gap_size(&self) -> f64 {
        self.required_level - self.current_level
    }
}

/// Extracts taxonomy skills from a posting and ranks the candidate's gaps.
pub struct SkillsGapAnalyzer {
    taxonomy: SkillTaxonomy,
    matcher: AhoCorasick,
    requirement_patterns: Vec<Regex>,
}

impl SkillsGapAnalyzer {
    pub fn new(taxonomy: SkillTaxonomy) -> Result<Self> {
        let patterns: Vec<&str> = taxonomy.skills.iter().map(|s| s.name).collect();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| {
                CareerCompassError::Configuration(format!(
                    "Failed to build skill matcher: {}",
                    e
                ))
            })?;

        // Phrases that mark a skill as an explicit requirement
        let requirement_patterns = vec![
            Regex::new(r"(?i)(?:required|must have|should have|experience with|knowledge of|proficient in):?\s*([^.!?\n]+)")
                .expect("static regex"),
            Regex::new(r"(?i)(?:minimum|preferred)\s+\d+\+?\s+years?\s+(?:of\s+)?(?:experience\s+)?(?:with|in)\s+([^.!?\n]+)")
                .expect("static regex"),
        ];

        Ok(Self {
            taxonomy,
            matcher,
            requirement_patterns,
        })
    }

    /// Produce the job's skill gaps, sorted by descending gap size.
    /// Explicitly-required skills break ties ahead of merely-mentioned ones.
    pub fn analyze(
        &self,
        job: &JobOpportunity,
        profile: &CandidateSkillProfile,
    ) -> Vec<SkillGap> {
        let text = job.searchable_text();
        let mentioned = self.matched_skill_ids(&text);
        let explicit = self.explicitly_required_ids(job);

        let mut gaps: Vec<(SkillGap, bool)> = mentioned
            .into_iter()
            .map(|pattern_id| {
                let definition = &self.taxonomy.skills[pattern_id];
                let current_level = profile.level_for(definition.name).clamp(0.0, 1.0);
                let required_level = definition.required_level().clamp(0.0, 1.0);
                let gap = required_level - current_level;

                let gap_entry = SkillGap {
                    skill: definition.name.to_string(),
                    category: definition.category,
                    current_level,
                    required_level,
                    priority: GapPriority::from_gap(gap),
                    learning_time_estimate: learning_time_for_gap(gap).to_string(),
                    resources: self.resources_for(pattern_id),
                };
                (gap_entry, explicit.contains(&pattern_id))
            })
            .collect();

        gaps.sort_by(|(a, a_explicit), (b, b_explicit)| {
            b.gap_size()
                .partial_cmp(&a.gap_size())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b_explicit.cmp(a_explicit))
                .then_with(|| a.skill.cmp(&b.skill))
        });

        gaps.into_iter().map(|(gap, _)| gap).collect()
    }

    /// All taxonomy skills appearing in the text as whole words
    fn matched_skill_ids(&self, text: &str) -> Vec<usize> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();

        for mat in self.matcher.find_iter(text) {
            if !on_word_boundary(text, mat.start(), mat.end()) {
                continue;
            }
            let id = mat.pattern().as_usize();
            if seen.insert(id) {
                ids.push(id);
            }
        }

        ids
    }

    /// Skills named in the requirements list or in an explicit requirement
    /// phrase within the description
    fn explicitly_required_ids(&self, job: &JobOpportunity) -> HashSet<usize> {
        let mut ids = HashSet::new();

        for requirement in &job.requirements {
            ids.extend(self.matched_skill_ids(requirement));
        }

        for pattern in &self.requirement_patterns {
            for cap in pattern.captures_iter(&job.description) {
                if let Some(phrase) = cap.get(1) {
                    ids.extend(self.matched_skill_ids(phrase.as_str()));
                }
            }
        }

        ids
    }

    fn resources_for(&self, pattern_id: usize) -> Vec<String> {
        let definition = &self.taxonomy.skills[pattern_id];
        if definition.resources.is_empty() {
            generic_resources(definition.name)
        } else {
            definition.resources.iter().map(|r| r.to_string()).collect()
        }
    }

    pub fn skill_count(&self) -> usize {
        self.taxonomy.len()
    }
}

fn learning_time_for_gap(gap: f64) -> &'static str {
    // Same thresholds as priority
    if gap > 0.4 {
        "2-3 months"
    } else if gap > 0.2 {
        "3-6 weeks"
    } else {
        "1-2 weeks"
    }
}

/// Fallback phrasing for skills without curated resources
fn generic_resources(skill: &str) -> Vec<String> {
    vec![
        format!("Online courses and tutorials covering {}", skill),
        format!("Hands-on practice projects built around {}", skill),
        format!("Community forums and recent articles on {}", skill),
    ]
}

/// A match only counts when it is not embedded inside a larger word
/// ("excel" inside "excellent" does not count)
fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}
