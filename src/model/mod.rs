//! Data model: search criteria, job opportunities, skill profiles, tiers

pub mod criteria;
pub mod job;
pub mod profile;
pub mod tier;

pub use criteria::{CareerField, CompanySize, ExperienceLevel, SearchCriteria};
pub use job::{JobOpportunity, RawJobRecord};
pub use profile::CandidateSkillProfile;
pub use tier::{tier_catalog, RiskLevel, Tier, TierSpec};
