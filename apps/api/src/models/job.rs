use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::skill_set::SkillSet;

/// Bucket a job skill falls into. Ordering here is the order skills are
/// flattened in for scoring and gap reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    DomainSpecific,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::DomainSpecific,
    ];

    /// Weight assigned to every skill of this category unless the caller overrides it.
    pub fn default_weight(self) -> f64 {
        match self {
            SkillCategory::Technical => 0.6,
            SkillCategory::Soft => 0.3,
            SkillCategory::DomainSpecific => 0.4,
        }
    }
}

/// Structured facts extracted from a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFacts {
    #[serde(default)]
    pub title: Option<String>,
    /// Full description text; experience, education and semantic scoring read it.
    pub description: String,
    pub skills_by_category: BTreeMap<SkillCategory, SkillSet>,
    /// Raw lines of the requirement sections, document order.
    pub requirements: Vec<String>,
    /// Per-skill weight in [0, 1].
    pub skill_weights: BTreeMap<String, f64>,
}

impl JobFacts {
    /// All required skills, technical first, then soft, then domain-specific.
    pub fn required_skills(&self) -> Vec<&str> {
        let mut seen = SkillSet::new();
        let mut out = Vec::new();
        for skills in SkillCategory::ALL.iter().filter_map(|&c| self.skills_in(c)) {
            for skill in skills.iter() {
                if seen.insert(skill) {
                    out.push(skill);
                }
            }
        }
        out
    }

    pub fn skills_in(&self, category: SkillCategory) -> Option<&SkillSet> {
        self.skills_by_category.get(&category)
    }
}
