//! Weighted skill overlap and skill-gap detection.
//!
//! Credit per required job skill:
//! - exact case-insensitive match → full weight
//! - substring containment either way → 80% of the weight
//! - NLP similarity above 0.8 → 80% of the weight
//! - otherwise nothing
//!
//! Gap detection only looks at the first two tiers, so a skill credited
//! through similarity alone still shows up as a gap.

use std::collections::BTreeMap;

use crate::matching::weights::weight_for;
use crate::models::SkillSet;
use crate::nlp::NlpProvider;

pub const PARTIAL_CREDIT: f64 = 0.8;
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillMatch {
    Exact,
    Contained,
    Similar,
    Missing,
}

impl SkillMatch {
    pub fn credit(self) -> f64 {
        match self {
            SkillMatch::Exact => 1.0,
            SkillMatch::Contained | SkillMatch::Similar => PARTIAL_CREDIT,
            SkillMatch::Missing => 0.0,
        }
    }

    /// Whether the skill counts as present for matched/gap reporting.
    pub fn is_present(self) -> bool {
        matches!(self, SkillMatch::Exact | SkillMatch::Contained)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillAssessment {
    /// 0–100, unrounded.
    pub score: f64,
    pub matched: SkillSet,
    /// Job-skill order.
    pub gaps: Vec<String>,
}

/// Best match tier for one job skill against the candidate's skills.
pub fn classify(job_skill: &str, candidate_lower: &[String], nlp: &dyn NlpProvider) -> SkillMatch {
    let job_lower = job_skill.trim().to_lowercase();
    if job_lower.is_empty() {
        return SkillMatch::Missing;
    }
    if candidate_lower.iter().any(|c| *c == job_lower) {
        return SkillMatch::Exact;
    }
    if candidate_lower
        .iter()
        .any(|c| c.contains(job_lower.as_str()) || job_lower.contains(c.as_str()))
    {
        return SkillMatch::Contained;
    }
    if candidate_lower
        .iter()
        .any(|c| nlp.similarity(&job_lower, c) > SIMILARITY_THRESHOLD)
    {
        return SkillMatch::Similar;
    }
    SkillMatch::Missing
}

/// Scores `job_skills` against `candidate_skills` with per-skill `weights`.
pub fn assess_skills(
    candidate_skills: &SkillSet,
    job_skills: &[&str],
    weights: &BTreeMap<String, f64>,
    nlp: &dyn NlpProvider,
) -> SkillAssessment {
    let candidate_lower: Vec<String> = candidate_skills.iter().map(str::to_lowercase).collect();

    let mut total_weight = 0.0;
    let mut matched_weight = 0.0;
    let mut matched = SkillSet::new();
    let mut gaps = Vec::new();

    for &job_skill in job_skills {
        let weight = weight_for(weights, job_skill);
        let tier = classify(job_skill, &candidate_lower, nlp);

        total_weight += weight;
        matched_weight += weight * tier.credit();

        if tier.is_present() {
            matched.insert(job_skill);
        } else {
            gaps.push(job_skill.to_string());
        }
    }

    let score = if total_weight > 0.0 {
        matched_weight / total_weight * 100.0
    } else {
        0.0
    };

    SkillAssessment {
        score,
        matched,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{EntitySpan, RuleBasedNlp, TextSpan};

    /// Treats a fixed pair of skills as near-identical.
    struct Synonyms(&'static str, &'static str);

    impl NlpProvider for Synonyms {
        fn entities(&self, _text: &str) -> Vec<EntitySpan> {
            Vec::new()
        }

        fn noun_chunks(&self, _text: &str) -> Vec<TextSpan> {
            Vec::new()
        }

        fn similarity(&self, a: &str, b: &str) -> f64 {
            if (a == self.0 && b == self.1) || (a == self.1 && b == self.0) {
                0.95
            } else {
                0.0
            }
        }
    }

    fn skills(items: &[&str]) -> SkillSet {
        items.iter().copied().collect()
    }

    fn no_weights() -> BTreeMap<String, f64> {
        BTreeMap::new()
    }

    #[test]
    fn test_exact_and_substring_credit() {
        let result = assess_skills(
            &skills(&["Python", "react native"]),
            &["python", "react", "kubernetes"],
            &no_weights(),
            &RuleBasedNlp::new(),
        );
        // (1.0 + 0.8 + 0) / 3
        assert!((result.score - 60.0).abs() < 1e-9);
        assert_eq!(result.matched.iter().collect::<Vec<_>>(), vec!["python", "react"]);
        assert_eq!(result.gaps, vec!["kubernetes"]);
    }

    #[test]
    fn test_weights_shift_score() {
        let weights: BTreeMap<String, f64> =
            [("rust".to_string(), 0.6), ("leadership".to_string(), 0.3)]
                .into_iter()
                .collect();
        let result = assess_skills(
            &skills(&["rust"]),
            &["rust", "leadership"],
            &weights,
            &RuleBasedNlp::new(),
        );
        assert!((result.score - 100.0 * 0.6 / 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_scores_but_still_a_gap() {
        let nlp = Synonyms("postgres", "postgresql db");
        let result = assess_skills(&skills(&["postgresql db"]), &["postgres"], &no_weights(), &nlp);
        // "postgresql db" contains "postgres", so this is a substring hit.
        assert!(result.gaps.is_empty());

        let nlp = Synonyms("k8s", "kubernetes");
        let result = assess_skills(&skills(&["kubernetes"]), &["k8s"], &no_weights(), &nlp);
        assert!((result.score - 80.0).abs() < 1e-9);
        assert!(result.matched.is_empty());
        assert_eq!(result.gaps, vec!["k8s"]);
    }

    #[test]
    fn test_no_job_skills_scores_zero() {
        let result = assess_skills(&skills(&["rust"]), &[], &no_weights(), &RuleBasedNlp::new());
        assert_eq!(result.score, 0.0);
        assert!(result.gaps.is_empty());
    }

    #[test]
    fn test_zero_total_weight_scores_zero() {
        let weights: BTreeMap<String, f64> = [("rust".to_string(), 0.0)].into_iter().collect();
        let result = assess_skills(&skills(&["rust"]), &["rust"], &weights, &RuleBasedNlp::new());
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_gaps_disjoint_from_matched() {
        let result = assess_skills(
            &skills(&["aws", "sql", "team leadership"]),
            &["aws", "mysql", "leadership", "terraform", "go"],
            &no_weights(),
            &RuleBasedNlp::new(),
        );
        for gap in &result.gaps {
            assert!(!result.matched.contains(gap), "{gap} is both matched and a gap");
        }
        assert_eq!(result.matched.len() + result.gaps.len(), 5);
    }

    #[test]
    fn test_adding_candidate_skill_never_lowers_score() {
        let job = ["python", "docker", "kubernetes", "leadership"];
        let nlp = RuleBasedNlp::new();
        let mut candidate = skills(&["python"]);
        let mut previous = assess_skills(&candidate, &job, &no_weights(), &nlp).score;
        for extra in ["dockerfiles", "leadership", "kubernetes", "cobol"] {
            candidate.insert(extra);
            let next = assess_skills(&candidate, &job, &no_weights(), &nlp).score;
            assert!(next >= previous, "adding {extra} lowered {previous} to {next}");
            previous = next;
        }
    }

    #[test]
    fn test_removing_unmatched_job_skill_never_lowers_score() {
        let nlp = RuleBasedNlp::new();
        let candidate = skills(&["python", "sql"]);
        let full = assess_skills(&candidate, &["python", "sql", "haskell"], &no_weights(), &nlp);
        let trimmed = assess_skills(&candidate, &["python", "sql"], &no_weights(), &nlp);
        assert!(trimmed.score >= full.score);
    }
}
