//! Matching Engine — scores a candidate's facts against a job's facts.
//!
//! Four components, each in [0, 100]:
//! - skills: weighted overlap with partial credit (see `skills`)
//! - experience: stated years against the job's required years
//! - education: highest degree level on each side
//! - semantic: TF-IDF cosine of the two raw texts
//!
//! `overall = 0.4·skills + 0.3·experience + 0.2·education + 0.1·semantic`,
//! computed on unrounded components. Only reported values are rounded.
//!
//! Scoring never fails from the caller's point of view: any internal error
//! is logged and turned into `MatchResult::failed`.

pub mod education;
pub mod experience;
pub mod handlers;
pub mod justification;
pub mod semantic;
pub mod skills;
pub mod weights;

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use crate::extraction::experience::extract_required_years;
use crate::models::{CandidateFacts, JobFacts, MatchResult, ScoreBreakdown};
use crate::nlp::{NlpProvider, RuleBasedNlp};

pub use weights::ComponentWeights;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid weight for '{name}': {value}")]
    InvalidWeight { name: String, value: f64 },

    #[error("{component} score is not a finite number")]
    NonFiniteScore { component: &'static str },
}

/// Stateless scorer. Safe to share across threads and to call concurrently.
#[derive(Clone)]
pub struct MatchingEngine {
    nlp: Arc<dyn NlpProvider>,
    weights: ComponentWeights,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(Arc::new(RuleBasedNlp::new()))
    }
}

impl MatchingEngine {
    pub fn new(nlp: Arc<dyn NlpProvider>) -> Self {
        Self::with_weights(nlp, ComponentWeights::default())
    }

    pub fn with_weights(nlp: Arc<dyn NlpProvider>, weights: ComponentWeights) -> Self {
        Self { nlp, weights }
    }

    /// Full match report. `skill_weights` overrides the job's per-skill
    /// defaults skill by skill.
    pub fn score(
        &self,
        candidate: &CandidateFacts,
        job: &JobFacts,
        skill_weights: Option<&BTreeMap<String, f64>>,
    ) -> MatchResult {
        match self.try_score(candidate, job, skill_weights) {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, candidate = %candidate.name, "Error calculating match score");
                MatchResult::failed(self.weights)
            }
        }
    }

    /// Same as `score` but surfaces the internal error.
    pub fn try_score(
        &self,
        candidate: &CandidateFacts,
        job: &JobFacts,
        skill_weights: Option<&BTreeMap<String, f64>>,
    ) -> Result<MatchResult, MatchError> {
        self.weights.validate()?;

        let merged = weights::merge_weights(&job.skill_weights, skill_weights);
        if let Some((name, &value)) = merged.iter().find(|(_, w)| !w.is_finite() || **w < 0.0) {
            return Err(MatchError::InvalidWeight {
                name: name.clone(),
                value,
            });
        }

        let job_skills = job.required_skills();
        let assessment =
            skills::assess_skills(&candidate.skills, &job_skills, &merged, self.nlp.as_ref());

        let required_years = extract_required_years(&job.description);
        let skill_score = component("skill", assessment.score)?;
        let experience_score = component(
            "experience",
            experience::experience_score(candidate.experience_years, required_years),
        )?;
        let education_score = component(
            "education",
            education::education_score(&candidate.education, &job.description),
        )?;
        let semantic_score = component(
            "semantic",
            semantic::semantic_score(&candidate.raw_text, &job.description),
        )?;

        let overall = component(
            "overall",
            self.weights
                .combine(skill_score, experience_score, education_score, semantic_score),
        )?;

        let justification = justification::build_justification(
            skill_score,
            experience_score,
            education_score,
            &assessment.gaps,
        );

        debug!(
            candidate = %candidate.name,
            overall,
            skill_score,
            experience_score,
            education_score,
            semantic_score,
            required_years,
            gaps = assessment.gaps.len(),
            "match scored"
        );

        let breakdown = ScoreBreakdown {
            skill_score: round2(skill_score),
            experience_score: round2(experience_score),
            education_score: round2(education_score),
            semantic_score: round2(semantic_score),
            weights_used: self.weights,
            matched_skills: assessment.matched.iter().map(String::from).collect(),
            missing_skills: assessment.gaps.clone(),
        };

        Ok(MatchResult {
            overall_score: round2(overall),
            skill_score: round2(skill_score),
            experience_score: round2(experience_score),
            education_score: round2(education_score),
            semantic_score: round2(semantic_score),
            matched_skills: assessment.matched,
            skill_gaps: assessment.gaps,
            justification,
            breakdown,
        })
    }

    /// Scores every candidate against `job` and orders them by overall score,
    /// highest first. Ties keep input order. Pairs carry the input index.
    pub fn rank_candidates(
        &self,
        job: &JobFacts,
        candidates: &[CandidateFacts],
        skill_weights: Option<&BTreeMap<String, f64>>,
    ) -> Vec<(usize, MatchResult)> {
        let mut ranked: Vec<(usize, MatchResult)> = candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| (i, self.score(candidate, job, skill_weights)))
            .collect();
        ranked.sort_by(|a, b| b.1.overall_score.total_cmp(&a.1.overall_score));
        ranked
    }
}

/// Scores with the default engine (rule-based NLP, default component weights).
pub fn score_match(
    candidate: &CandidateFacts,
    job: &JobFacts,
    skill_weights: Option<&BTreeMap<String, f64>>,
) -> MatchResult {
    MatchingEngine::default().score(candidate, job, skill_weights)
}

fn component(name: &'static str, value: f64) -> Result<f64, MatchError> {
    if !value.is_finite() {
        return Err(MatchError::NonFiniteScore { component: name });
    }
    Ok(value.clamp(0.0, 100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
