//! Candidate skill profile supplied alongside the search criteria

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use strsim::jaro_winkler;

/// Similarity floor for treating a profile key as the same skill
const FUZZY_SKILL_THRESHOLD: f64 = 0.85;

/// Optional mapping of skill name -> proficiency in [0, 1]. When no profile
/// is supplied, every skill's current level defaults to 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateSkillProfile {
    #[serde(default)]
    pub skills: HashMap<String, f64>,
}

impl CandidateSkillProfile {
    pub fn new(skills: HashMap<String, f64>) -> Self {
        Self { skills }
    }

    /// Load a profile from a JSON file of `{"skill": level}` pairs
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let skills: HashMap<String, f64> = serde_json::from_str(&content)?;
        Ok(Self::new(skills))
    }

    /// Current proficiency for a skill, fuzzy-matching profile keys so that
    /// spelling variants ("Javascript" vs "javascript") still resolve.
    /// Unknown skills return 0.
    pub fn level_for(&self, skill: &str) -> f64 {
        let wanted = skill.to_lowercase();

        if let Some(level) = self
            .skills
            .iter()
            .find(|(name, _)| name.to_lowercase() == wanted)
            .map(|(_, level)| *level)
        {
            return level.clamp(0.0, 1.0);
        }

        let mut best: Option<(f64, f64)> = None; // (similarity, level)
        for (name, level) in &self.skills {
            let similarity = jaro_winkler(&name.to_lowercase(), &wanted);
            if similarity >= FUZZY_SKILL_THRESHOLD {
                match best {
                    Some((existing, _)) if existing >= similarity => {}
                    _ => best = Some((similarity, *level)),
                }
            }
        }

        best.map(|(_, level)| level.clamp(0.0, 1.0)).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
