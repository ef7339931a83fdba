//! Text Extractor — turns plain resume / job-description text into fact records.
//!
//! Every entry point is infallible: missing signals come back as the
//! conservative defaults on `CandidateFacts` / `JobFacts`.

pub mod contact;
pub mod experience;
pub mod handlers;
pub mod name;
pub mod sections;
pub mod skills;
pub mod validation;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CandidateFacts, JobFacts};
use crate::nlp::{NlpProvider, RuleBasedNlp};
use crate::taxonomy::SkillTaxonomy;

/// Output of `TextExtractor::extract`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractedFacts {
    Candidate(CandidateFacts),
    Job(JobFacts),
}

/// Holds the shared vocabulary and NLP backend. Cheap to clone.
#[derive(Clone)]
pub struct TextExtractor {
    taxonomy: Arc<SkillTaxonomy>,
    nlp: Arc<dyn NlpProvider>,
}

impl Default for TextExtractor {
    /// Built-in taxonomy with the rule-based NLP provider.
    fn default() -> Self {
        Self::new(
            Arc::new(SkillTaxonomy::builtin().clone()),
            Arc::new(RuleBasedNlp::new()),
        )
    }
}

/// Candidate facts using the default extractor.
pub fn extract_candidate(text: &str) -> CandidateFacts {
    TextExtractor::default().extract_candidate(text)
}

/// Job facts using the default extractor.
pub fn analyze_job(text: &str) -> JobFacts {
    TextExtractor::default().analyze_job(text)
}

impl TextExtractor {
    pub fn new(taxonomy: Arc<SkillTaxonomy>, nlp: Arc<dyn NlpProvider>) -> Self {
        Self { taxonomy, nlp }
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    pub fn extract(&self, text: &str, is_job_description: bool) -> ExtractedFacts {
        if is_job_description {
            ExtractedFacts::Job(self.analyze_job(text))
        } else {
            ExtractedFacts::Candidate(self.extract_candidate(text))
        }
    }

    pub fn extract_candidate(&self, text: &str) -> CandidateFacts {
        let email = contact::extract_email(text);
        let name = name::extract_name(text, email.as_deref(), self.nlp.as_ref());
        let phone = contact::extract_phone(text);
        let skills = skills::extract_skills(text, &self.taxonomy, self.nlp.as_ref());
        let experience_years = experience::extract_experience_years(text);
        let education = sections::extract_education(text);
        let work_experience = sections::extract_work_experience(text);

        debug!(
            has_email = email.is_some(),
            has_phone = phone.is_some(),
            skills = skills.len(),
            experience_years,
            education_lines = education.len(),
            work_blocks = work_experience.len(),
            "candidate extracted"
        );

        CandidateFacts {
            name,
            email,
            phone,
            skills,
            experience_years,
            education,
            work_experience,
            raw_text: text.to_string(),
        }
    }

    pub fn analyze_job(&self, text: &str) -> JobFacts {
        let found = skills::extract_skills(text, &self.taxonomy, self.nlp.as_ref());
        let skills_by_category = skills::categorize_skills(&found, &self.taxonomy);
        let skill_weights = skills::default_skill_weights(&skills_by_category);
        let requirements = sections::extract_requirements(text);

        debug!(
            skills = found.len(),
            requirement_lines = requirements.len(),
            "job description analyzed"
        );

        JobFacts {
            title: None,
            description: text.to_string(),
            skills_by_category,
            requirements,
            skill_weights,
        }
    }
}
