//! Candidate/job matching: fact extraction from resume and job-description
//! text, and weighted, explainable match scoring.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod matching;
pub mod models;
pub mod nlp;
pub mod routes;
pub mod state;
pub mod taxonomy;

pub use extraction::{analyze_job, extract_candidate, ExtractedFacts, TextExtractor};
pub use matching::{score_match, ComponentWeights, MatchError, MatchingEngine};
pub use models::{CandidateFacts, JobFacts, MatchResult, ScoreBreakdown, SkillCategory, SkillSet};
pub use nlp::{NlpProvider, RuleBasedNlp};
pub use taxonomy::{SkillTaxonomy, TaxonomyError};
