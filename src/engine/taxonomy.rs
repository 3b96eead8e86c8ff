//! Immutable keyword taxonomies driving scoring and skills-gap analysis.
//!
//! Everything here is configuration data injected at construction time, so
//! tests can run against smaller tables and product can recalibrate without
//! code changes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Leadership,
    Financial,
    Communication,
    Analytical,
}

impl SkillCategory {
    /// Required-level fallback for skills without an explicit calibration
    pub fn default_required_level(&self) -> f64 {
        match self {
            SkillCategory::Technical => 0.70,
            SkillCategory::Soft => 0.50,
            SkillCategory::Leadership => 0.65,
            SkillCategory::Financial => 0.60,
            SkillCategory::Communication => 0.55,
            SkillCategory::Analytical => 0.60,
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Leadership => "leadership",
            SkillCategory::Financial => "financial",
            SkillCategory::Communication => "communication",
            SkillCategory::Analytical => "analytical",
        };
        write!(f, "{}", label)
    }
}

/// One skill the analyzer knows how to detect and calibrate
#[derive(Debug, Clone)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub category: SkillCategory,

    /// Calibrated required level; None falls back to the category default
    pub required_level: Option<f64>,

    /// Curated learning resources; empty list falls back to generic phrasing
    pub resources: &'static [&'static str],
}

impl SkillDefinition {
    pub fn required_level(&self) -> f64 {
        self.required_level
            .unwrap_or_else(|| self.category.default_required_level())
    }
}

/// A recognized key benefit and the phrasings job postings use for it
#[derive(Debug, Clone)]
pub struct BenefitKeyword {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

/// Keyword tables consumed by the multi-factor scorer
#[derive(Debug, Clone)]
pub struct ScoringTaxonomy {
    pub seniority_titles: Vec<&'static str>,
    pub growth_keywords: Vec<&'static str>,
    pub key_benefits: Vec<BenefitKeyword>,
    pub work_life_keywords: Vec<&'static str>,
}

impl Default for ScoringTaxonomy {
    fn default() -> Self {
        Self {
            seniority_titles: vec![
                "senior", "lead", "principal", "staff", "head of", "director",
                "vp", "vice president", "manager", "architect", "chief",
            ],
            growth_keywords: vec![
                "growth", "leadership", "mentorship", "career development",
                "advancement", "promotion", "ownership", "learning budget",
                "professional development",
            ],
            key_benefits: vec![
                BenefitKeyword {
                    name: "health insurance",
                    patterns: &["health insurance", "medical insurance", "healthcare"],
                },
                BenefitKeyword {
                    name: "retirement",
                    patterns: &["401k", "401(k)", "retirement", "pension"],
                },
                BenefitKeyword {
                    name: "dental",
                    patterns: &["dental"],
                },
                BenefitKeyword {
                    name: "vision",
                    patterns: &["vision"],
                },
                BenefitKeyword {
                    name: "pto",
                    patterns: &["pto", "paid time off"],
                },
                BenefitKeyword {
                    name: "vacation",
                    patterns: &["vacation"],
                },
            ],
            work_life_keywords: vec![
                "work-life balance", "work life balance", "flexible hours",
                "flexible schedule", "flexibility", "no overtime",
            ],
        }
    }
}

/// Skill table consumed by the skills-gap analyzer
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    pub skills: Vec<SkillDefinition>,
}

impl SkillTaxonomy {
    pub fn find(&self, name: &str) -> Option<&SkillDefinition> {
        self.skills
            .iter()
            .find(|skill| skill.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        use SkillCategory::*;

        let skills = vec![
            // Technical
            skill("python", Technical, Some(0.70), &[
                "Python crash course on a MOOC platform",
                "Automate a small workflow you do by hand today",
                "Read through the standard library docs for collections and itertools",
            ]),
            skill("sql", Technical, Some(0.65), &[
                "Interactive SQL exercises (joins, window functions)",
                "Model and query a small dataset from your own domain",
            ]),
            skill("javascript", Technical, Some(0.65), &[]),
            skill("rust", Technical, Some(0.75), &[
                "Work through The Rust Book end to end",
                "Port a small tool you already understand to Rust",
            ]),
            skill("java", Technical, None, &[]),
            skill("aws", Technical, Some(0.70), &[
                "AWS Cloud Practitioner learning path",
                "Deploy a toy service with S3, Lambda and CloudWatch",
                "Study the well-architected framework whitepaper",
            ]),
            skill("docker", Technical, Some(0.60), &[
                "Containerize one of your existing projects",
                "Official Docker getting-started tutorial",
            ]),
            skill("kubernetes", Technical, Some(0.75), &[]),
            skill("machine learning", Technical, Some(0.80), &[
                "Introductory ML course with hands-on assignments",
                "Reproduce a published baseline on a public dataset",
            ]),
            skill("ci/cd", Technical, Some(0.60), &[]),
            skill("microservices", Technical, None, &[]),
            skill("apis", Technical, Some(0.60), &[]),
            skill("security", Technical, None, &[]),
            skill("cloud", Technical, Some(0.65), &[]),
            // Soft
            skill("teamwork", Soft, None, &[]),
            skill("adaptability", Soft, None, &[]),
            skill("problem solving", Soft, Some(0.60), &[
                "Practice structured problem breakdowns on real work items",
                "Write up post-mortems for two past projects",
            ]),
            skill("creativity", Soft, None, &[]),
            skill("collaboration", Soft, None, &[]),
            skill("time management", Soft, None, &[]),
            // Leadership
            skill("leadership", Leadership, Some(0.70), &[
                "Lead a small cross-functional initiative end to end",
                "Find a mentor one level above your target role",
                "Read one well-regarded book on engineering leadership",
            ]),
            skill("mentoring", Leadership, Some(0.60), &[]),
            skill("team management", Leadership, Some(0.70), &[]),
            skill("strategic planning", Leadership, Some(0.70), &[
                "Draft a one-page strategy doc for your current team",
                "Study strategy write-ups from companies in your industry",
            ]),
            skill("coaching", Leadership, None, &[]),
            skill("project management", Leadership, Some(0.65), &[
                "Run one project with explicit milestones and a retro",
                "Learn one PM methodology well (Scrum or Kanban)",
                "Shadow an experienced project manager for a sprint",
            ]),
            // Financial
            skill("budgeting", Financial, Some(0.60), &[
                "Build a simple budget model in a spreadsheet",
                "Review how your team's budget is planned and tracked",
            ]),
            skill("forecasting", Financial, None, &[]),
            skill("financial modeling", Financial, Some(0.70), &[]),
            skill("financial analysis", Financial, Some(0.65), &[]),
            skill("accounting", Financial, None, &[]),
            // Communication
            skill("communication", Communication, Some(0.60), &[
                "Present at a team meeting or local meetup",
                "Get written feedback on two documents you author",
            ]),
            skill("presentation", Communication, Some(0.55), &[]),
            skill("public speaking", Communication, None, &[]),
            skill("technical writing", Communication, Some(0.60), &[]),
            skill("negotiation", Communication, Some(0.55), &[
                "Study a negotiation fundamentals course",
                "Role-play salary conversations with a peer",
            ]),
            skill("stakeholder management", Communication, Some(0.65), &[]),
            // Analytical
            skill("data analysis", Analytical, Some(0.65), &[
                "Analyze a public dataset and publish the write-up",
                "Learn one visualization library well",
            ]),
            skill("critical thinking", Analytical, None, &[]),
            skill("research", Analytical, None, &[]),
            skill("statistics", Analytical, Some(0.65), &[]),
            skill("reporting", Analytical, None, &[]),
            skill("excel", Analytical, Some(0.55), &[]),
        ];

        Self { skills }
    }
}

fn skill(
    name: &'static str,
    category: SkillCategory,
    required_level: Option<f64>,
    resources: &'static [&'static str],
) -> SkillDefinition {
    SkillDefinition {
        name,
        category,
        required_level,
        resources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_covers_all_categories() {
        let taxonomy = SkillTaxonomy::default();
        for category in [
            SkillCategory::Technical,
            SkillCategory::Soft,
            SkillCategory::Leadership,
            SkillCategory::Financial,
            SkillCategory::Communication,
            SkillCategory::Analytical,
        ] {
            assert!(
                taxonomy.skills.iter().any(|s| s.category == category),
                "no skills in category {}",
                category
            );
        }
    }

    #[test]
    fn test_uncalibrated_skill_uses_category_default() {
        let taxonomy = SkillTaxonomy::default();
        let java = taxonomy.find("java").unwrap();
        assert_eq!(java.required_level(), SkillCategory::Technical.default_required_level());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let taxonomy = SkillTaxonomy::default();
        assert!(taxonomy.find("Python").is_some());
        assert!(taxonomy.find("nonexistent skill").is_none());
    }

    #[test]
    fn test_scoring_taxonomy_has_six_key_benefits() {
        assert_eq!(ScoringTaxonomy::default().key_benefits.len(), 6);
    }
}
