//! Tier-specific application strategy templates

use crate::model::{JobOpportunity, Tier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub phase: String,
    pub duration: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewPrep {
    pub technical: Vec<String>,
    pub behavioral: Vec<String>,
    pub case_study: Vec<String>,
}

/// Templated guidance bundle for applying to one job. Content is one of
/// three fixed per-tier templates with job/company name substitution and
/// no other per-job customization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationStrategy {
    pub tier: Tier,
    pub timeline: Vec<TimelinePhase>,
    pub key_selling_points: Vec<String>,
    pub anticipated_challenges: Vec<String>,
    pub interview_prep: InterviewPrep,
    pub negotiation_tips: Vec<String>,
    pub networking_suggestions: Vec<String>,
    pub follow_up_sequence: Vec<String>,
}

pub struct ApplicationStrategyBuilder;

impl ApplicationStrategyBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, job: &JobOpportunity, tier: Tier) -> ApplicationStrategy {
        match tier {
            Tier::Conservative => self.conservative(job),
            Tier::Optimal => self.optimal(job),
            Tier::Stretch => self.stretch(job),
        }
    }

    fn conservative(&self, job: &JobOpportunity) -> ApplicationStrategy {
        ApplicationStrategy {
            tier: Tier::Conservative,
            timeline: vec![
                TimelinePhase {
                    phase: "Research and tailor".to_string(),
                    duration: "Week 1".to_string(),
                    actions: vec![
                        format!("Research {} and the team behind this role", job.company),
                        format!("Tailor your resume to the {} posting", job.title),
                        "Line up two references who can speak to your current work".to_string(),
                    ],
                },
                TimelinePhase {
                    phase: "Apply and follow up".to_string(),
                    duration: "Week 2".to_string(),
                    actions: vec![
                        "Submit the application early in the week".to_string(),
                        format!("Follow up with the {} recruiter within five business days", job.company),
                        "Prepare a 30-second summary of why this is a natural next step".to_string(),
                    ],
                },
            ],
            key_selling_points: vec![
                "Direct experience in the responsibilities this role lists".to_string(),
                "Low ramp-up time: you can contribute in the first month".to_string(),
                "A track record that de-risks the hire for the manager".to_string(),
            ],
            anticipated_challenges: vec![
                "Standing out among similarly-qualified applicants".to_string(),
                "Justifying the move without appearing to chase only salary".to_string(),
            ],
            interview_prep: InterviewPrep {
                technical: vec![
                    "Refresh the fundamentals you use daily; expect applied questions".to_string(),
                    format!("Review the tools named in the {} posting", job.title),
                ],
                behavioral: vec![
                    "Prepare three stories showing reliable delivery".to_string(),
                    "Practice explaining why you are leaving your current role".to_string(),
                ],
                case_study: vec![
                    "Walk through a recent project end to end, focusing on your decisions".to_string(),
                ],
            },
            negotiation_tips: vec![
                "Anchor on the top of the posted range; your experience matches the role".to_string(),
                "A 15-20% increase is a reasonable, defensible ask here".to_string(),
            ],
            networking_suggestions: vec![
                format!("Find a current {} employee for a short informational chat", job.company),
                "Mention the referral program when you connect".to_string(),
            ],
            follow_up_sequence: vec![
                "Thank-you note within 24 hours of each interview".to_string(),
                "Status check one week after the final round".to_string(),
            ],
        }
    }

    fn optimal(&self, job: &JobOpportunity) -> ApplicationStrategy {
        ApplicationStrategy {
            tier: Tier::Optimal,
            timeline: vec![
                TimelinePhase {
                    phase: "Positioning".to_string(),
                    duration: "Weeks 1-2".to_string(),
                    actions: vec![
                        format!("Map your experience onto the {} requirements, gap by gap", job.title),
                        "Rewrite your resume summary around the two strongest overlaps".to_string(),
                        format!("Study {}'s recent announcements for talking points", job.company),
                    ],
                },
                TimelinePhase {
                    phase: "Application".to_string(),
                    duration: "Week 3".to_string(),
                    actions: vec![
                        "Submit with a short, specific cover note".to_string(),
                        "Ask a connection for an internal referral if one exists".to_string(),
                    ],
                },
                TimelinePhase {
                    phase: "Interview push".to_string(),
                    duration: "Weeks 4-6".to_string(),
                    actions: vec![
                        "Schedule mock interviews covering your weaker areas".to_string(),
                        "Prepare questions that show you have studied the team".to_string(),
                    ],
                },
            ],
            key_selling_points: vec![
                "A strong core match with clear growth headroom".to_string(),
                "Transferable wins you can restate in this role's terms".to_string(),
                "Motivation: this is the role you have been building toward".to_string(),
            ],
            anticipated_challenges: vec![
                "One or two requirements where your evidence is thin".to_string(),
                "Competing against candidates already at this level".to_string(),
                "Pricing yourself for a 25-30% jump without overreaching".to_string(),
            ],
            interview_prep: InterviewPrep {
                technical: vec![
                    "Close the top skill gap before the first screen".to_string(),
                    "Prepare a portfolio piece that proves the borderline skills".to_string(),
                ],
                behavioral: vec![
                    "Prepare stories of stretching beyond your formal role".to_string(),
                    "Practice the 'tell me about a failure' answer honestly".to_string(),
                ],
                case_study: vec![
                    "Rehearse structuring ambiguous problems aloud".to_string(),
                    format!("Sketch how you would approach {}'s likeliest business problem", job.company),
                ],
            },
            negotiation_tips: vec![
                "Hold your target; a 25-30% increase is the point of this move".to_string(),
                "Trade start date or signing bonus before trading base salary".to_string(),
                "Get competing processes to a similar stage for leverage".to_string(),
            ],
            networking_suggestions: vec![
                format!("Connect with two people in adjacent teams at {}", job.company),
                "Engage with the hiring manager's public posts before applying".to_string(),
            ],
            follow_up_sequence: vec![
                "Thank-you note within 24 hours, referencing a discussion detail".to_string(),
                "Share a relevant artifact (write-up, repo) after the technical round".to_string(),
                "Status check ten days after the final round".to_string(),
            ],
        }
    }

    fn stretch(&self, job: &JobOpportunity) -> ApplicationStrategy {
        ApplicationStrategy {
            tier: Tier::Stretch,
            timeline: vec![
                TimelinePhase {
                    phase: "Foundation".to_string(),
                    duration: "Month 1".to_string(),
                    actions: vec![
                        format!("Audit the {} requirements and rank your gaps honestly", job.title),
                        "Start a structured study plan for the two largest gaps".to_string(),
                        "Collect evidence of your highest-leverage wins to date".to_string(),
                    ],
                },
                TimelinePhase {
                    phase: "Visibility".to_string(),
                    duration: "Month 2".to_string(),
                    actions: vec![
                        format!("Build relationships with people at or around {}", job.company),
                        "Publish or present something in the role's domain".to_string(),
                    ],
                },
                TimelinePhase {
                    phase: "Application".to_string(),
                    duration: "Month 3".to_string(),
                    actions: vec![
                        "Apply through a warm introduction wherever possible".to_string(),
                        "Position your trajectory, not just your current title".to_string(),
                    ],
                },
            ],
            key_selling_points: vec![
                "Demonstrated slope: you grow faster than your peers".to_string(),
                "Fresh perspective from outside the role's usual pipeline".to_string(),
                "Hunger: stretch candidates out-prepare comfortable ones".to_string(),
            ],
            anticipated_challenges: vec![
                "Screening filters that key on titles you have not held".to_string(),
                "Imposter moments in interviews pitched above your level".to_string(),
                "A preparation period measured in months, not weeks".to_string(),
            ],
            interview_prep: InterviewPrep {
                technical: vec![
                    "Work through representative problems at the target level weekly".to_string(),
                    "Find a practice partner already operating at this level".to_string(),
                ],
                behavioral: vec![
                    "Reframe every story to emphasize scope and ownership".to_string(),
                    "Prepare a credible answer for 'why this jump now?'".to_string(),
                ],
                case_study: vec![
                    "Practice cases one level above where you operate today".to_string(),
                    format!("Prepare a 90-day plan for the {} role", job.title),
                ],
            },
            negotiation_tips: vec![
                "Let them anchor first; the band is above your current frame".to_string(),
                "Value equity and scope, not base salary alone".to_string(),
                "Do not discount yourself for being a stretch hire".to_string(),
            ],
            networking_suggestions: vec![
                format!("Ask for introductions to {} insiders through second-degree contacts", job.company),
                "Join the communities where people in this role actually talk".to_string(),
                "Offer help before asking for referrals".to_string(),
            ],
            follow_up_sequence: vec![
                "Thank-you note within 24 hours of each conversation".to_string(),
                "Send a follow-up artifact addressing a concern raised in interview".to_string(),
                "If rejected, ask for specifics and keep the relationship warm".to_string(),
            ],
        }
    }
}

impl Default for ApplicationStrategyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
