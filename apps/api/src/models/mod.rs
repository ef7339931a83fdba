pub mod candidate;
pub mod job;
pub mod match_result;
pub mod skill_set;

pub use candidate::CandidateFacts;
pub use job::{JobFacts, SkillCategory};
pub use match_result::{MatchResult, ScoreBreakdown};
pub use skill_set::SkillSet;
