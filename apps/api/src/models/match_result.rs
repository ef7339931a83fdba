use serde::{Deserialize, Serialize};

use crate::matching::weights::ComponentWeights;
use crate::models::skill_set::SkillSet;

pub const SCORING_FAILED_JUSTIFICATION: &str = "Error calculating match score";

/// Denormalized copy of the scores and skill lists, kept for callers that
/// store or display the breakdown as one blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub semantic_score: f64,
    pub weights_used: ComponentWeights,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Full match report for one candidate against one job. All scores in [0, 100],
/// rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub semantic_score: f64,
    /// Job skills with an exact or substring match among the candidate's skills.
    pub matched_skills: SkillSet,
    /// Job skills with no exact or substring match, in job-skill order.
    pub skill_gaps: Vec<String>,
    pub justification: String,
    pub breakdown: ScoreBreakdown,
}

impl MatchResult {
    /// The zeroed result returned when scoring hits an internal failure.
    pub fn failed(weights: ComponentWeights) -> Self {
        Self {
            overall_score: 0.0,
            skill_score: 0.0,
            experience_score: 0.0,
            education_score: 0.0,
            semantic_score: 0.0,
            matched_skills: SkillSet::new(),
            skill_gaps: Vec::new(),
            justification: SCORING_FAILED_JUSTIFICATION.to_string(),
            breakdown: ScoreBreakdown {
                weights_used: weights,
                ..ScoreBreakdown::default()
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        self.justification == SCORING_FAILED_JUSTIFICATION
    }
}
