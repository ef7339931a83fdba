//! Skill detection, categorization and default weighting.

use std::collections::BTreeMap;

use crate::models::{SkillCategory, SkillSet};
use crate::nlp::NlpProvider;
use crate::taxonomy::SkillTaxonomy;

/// A noun phrase counts as a skill when it contains one of these.
const SKILL_PHRASE_KEYWORDS: &[&str] = &["development", "management", "analysis", "design"];

/// Every taxonomy token, every soft-skill phrase, and skill-like noun phrases
/// found in `text`. Presence is binary; matching is case-insensitive substring.
pub fn extract_skills(text: &str, taxonomy: &SkillTaxonomy, nlp: &dyn NlpProvider) -> SkillSet {
    let text_lower = text.to_lowercase();
    let mut skills = SkillSet::new();

    skills.extend(taxonomy.technical_skills().filter(|s| text_lower.contains(*s)));
    skills.extend(
        taxonomy
            .soft_skills()
            .iter()
            .filter(|s| text_lower.contains(s.as_str()))
            .map(String::as_str),
    );

    for chunk in nlp.noun_chunks(text) {
        let phrase = chunk.text.trim();
        let word_count = phrase.split_whitespace().count();
        if !(2..=3).contains(&word_count) {
            continue;
        }
        let lower = phrase.to_lowercase();
        if SKILL_PHRASE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            skills.insert(phrase);
        }
    }

    skills
}

/// Technical if the taxonomy knows it, soft if it is a soft-skill phrase,
/// domain-specific otherwise. All three categories are always present.
pub fn categorize_skills(
    skills: &SkillSet,
    taxonomy: &SkillTaxonomy,
) -> BTreeMap<SkillCategory, SkillSet> {
    let mut categorized: BTreeMap<SkillCategory, SkillSet> = SkillCategory::ALL
        .iter()
        .map(|&c| (c, SkillSet::new()))
        .collect();

    for skill in skills.iter() {
        let category = if taxonomy.is_technical(skill) {
            SkillCategory::Technical
        } else if taxonomy.is_soft(skill) {
            SkillCategory::Soft
        } else {
            SkillCategory::DomainSpecific
        };
        categorized.entry(category).or_default().insert(skill);
    }

    categorized
}

/// One weight per skill, taken from its category's default.
pub fn default_skill_weights(
    categorized: &BTreeMap<SkillCategory, SkillSet>,
) -> BTreeMap<String, f64> {
    categorized
        .iter()
        .flat_map(|(category, skills)| {
            skills
                .iter()
                .map(move |skill| (skill.to_string(), category.default_weight()))
        })
        .collect()
}
