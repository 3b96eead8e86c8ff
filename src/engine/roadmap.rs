//! Preparation roadmaps: phased plans expanded from a job's skill gaps

use crate::engine::gap_analyzer::SkillGap;
use crate::model::{JobOpportunity, Tier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub name: String,
    pub duration: String,
    pub tasks: Vec<String>,
}

/// Phased, time-bucketed preparation plan for one recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationRoadmap {
    /// Tier-dependent bucket: "2-4 weeks" / "1-3 months" / "3-6 months"
    pub total_duration: String,
    pub phases: Vec<RoadmapPhase>,
    pub skill_development: Vec<SkillGap>,
    pub networking_plan: Vec<String>,
    pub portfolio_suggestions: Vec<String>,
    pub certification_recommendations: Vec<String>,
}

/// Certification rules keyed on description keywords
const CERTIFICATION_RULES: [(&str, &str); 4] = [
    (
        "python",
        "A recognized Python programming certification to formalize language depth",
    ),
    (
        "aws",
        "A cloud practitioner or solutions architect certification",
    ),
    (
        "project management",
        "A PMP-style project management certification",
    ),
    (
        "data",
        "An analytics or data-focused certification relevant to the role",
    ),
];

pub struct PreparationRoadmapBuilder;

impl PreparationRoadmapBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(
        &self,
        job: &JobOpportunity,
        tier: Tier,
        skill_gaps: &[SkillGap],
    ) -> PreparationRoadmap {
        PreparationRoadmap {
            total_duration: duration_bucket(tier).to_string(),
            phases: self.phases_for(job, tier),
            skill_development: skill_gaps.to_vec(),
            networking_plan: self.networking_plan(job),
            portfolio_suggestions: self.portfolio_suggestions(job, tier),
            certification_recommendations: certifications_for(&job.description),
        }
    }

    fn phases_for(&self, job: &JobOpportunity, tier: Tier) -> Vec<RoadmapPhase> {
        match tier {
            Tier::Conservative => vec![
                RoadmapPhase {
                    name: "Research and prepare".to_string(),
                    duration: "1-2 weeks".to_string(),
                    tasks: vec![
                        format!("Study {} and the posted responsibilities", job.company),
                        "Refresh the skills the posting names explicitly".to_string(),
                        "Update resume and references for this application".to_string(),
                    ],
                },
                RoadmapPhase {
                    name: "Apply and follow up".to_string(),
                    duration: "1-2 weeks".to_string(),
                    tasks: vec![
                        "Submit a tailored application".to_string(),
                        "Run one mock interview against the posting".to_string(),
                        "Follow up with the recruiter on schedule".to_string(),
                    ],
                },
            ],
            Tier::Optimal => vec![
                RoadmapPhase {
                    name: "Close the priority gaps".to_string(),
                    duration: "2-4 weeks".to_string(),
                    tasks: vec![
                        "Work the top two skill gaps on a fixed weekly cadence".to_string(),
                        "Collect proof points for each borderline requirement".to_string(),
                        "Ask a peer for honest feedback on your readiness".to_string(),
                    ],
                },
                RoadmapPhase {
                    name: "Position and apply".to_string(),
                    duration: "2-4 weeks".to_string(),
                    tasks: vec![
                        format!("Rewrite your materials in the language of the {} role", job.title),
                        "Secure a referral or warm introduction".to_string(),
                        "Submit and start interview preparation immediately".to_string(),
                    ],
                },
                RoadmapPhase {
                    name: "Interview cycle".to_string(),
                    duration: "2-4 weeks".to_string(),
                    tasks: vec![
                        "Weekly mock interviews across technical and behavioral".to_string(),
                        "Refine answers after every real interview round".to_string(),
                        "Keep one backup application in flight for leverage".to_string(),
                    ],
                },
            ],
            Tier::Stretch => vec![
                RoadmapPhase {
                    name: "Foundation".to_string(),
                    duration: "4-6 weeks".to_string(),
                    tasks: vec![
                        "Structured study plan for every high-priority gap".to_string(),
                        "Establish a weekly routine with measurable checkpoints".to_string(),
                        "Find a mentor operating at the target level".to_string(),
                    ],
                },
                RoadmapPhase {
                    name: "Portfolio".to_string(),
                    duration: "3-4 weeks".to_string(),
                    tasks: vec![
                        "Build one substantial artifact proving the new skills".to_string(),
                        "Document outcomes in the language of the target role".to_string(),
                        "Get the artifact reviewed by someone senior".to_string(),
                    ],
                },
                RoadmapPhase {
                    name: "Networking".to_string(),
                    duration: "2-4 weeks".to_string(),
                    tasks: vec![
                        format!("Build two warm relationships connected to {}", job.company),
                        "Show up where practitioners of this role gather".to_string(),
                        "Ask for feedback, not favors, in early conversations".to_string(),
                    ],
                },
                RoadmapPhase {
                    name: "Application".to_string(),
                    duration: "2-3 weeks".to_string(),
                    tasks: vec![
                        "Apply with a warm introduction where possible".to_string(),
                        "Lead with trajectory and the portfolio artifact".to_string(),
                        "Prepare for a longer, more demanding interview loop".to_string(),
                    ],
                },
            ],
        }
    }

    fn networking_plan(&self, job: &JobOpportunity) -> Vec<String> {
        vec![
            format!("Identify 3-5 people at {} or in equivalent roles elsewhere", job.company),
            "Request short informational conversations, one per week".to_string(),
            "Keep notes and follow up with anything you promised".to_string(),
        ]
    }

    fn portfolio_suggestions(&self, job: &JobOpportunity, tier: Tier) -> Vec<String> {
        let mut suggestions = vec![format!(
            "A case study framed around the problems a {} solves",
            job.title
        )];
        if tier == Tier::Stretch {
            suggestions.push(
                "A public artifact (talk, write-up, or project) at the target level".to_string(),
            );
        }
        suggestions.push("A one-page summary of quantified wins from your current role".to_string());
        suggestions
    }
}

impl Default for PreparationRoadmapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn duration_bucket(tier: Tier) -> &'static str {
    match tier {
        Tier::Conservative => "2-4 weeks",
        Tier::Optimal => "1-3 months",
        Tier::Stretch => "3-6 months",
    }
}

/// Scan the description for domain keywords with a certification mapping
fn certifications_for(description: &str) -> Vec<String> {
    let description = description.to_lowercase();
    CERTIFICATION_RULES
        .iter()
        .filter(|(keyword, _)| description.contains(keyword))
        .map(|(_, recommendation)| recommendation.to_string())
        .collect()
}
