//! Skill Taxonomy — categorized vocabulary of technical and soft skills.
//!
//! The vocabulary is data, not code: the built-in copy is embedded from
//! `data/skill_taxonomy.json` and a replacement file can be supplied at
//! startup via `SKILL_TAXONOMY_PATH`. Once loaded it is never mutated and is
//! shared behind an `Arc` by every extraction call.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_TAXONOMY_JSON: &str = include_str!("../../data/skill_taxonomy.json");

static BUILTIN: Lazy<SkillTaxonomy> = Lazy::new(|| {
    SkillTaxonomy::from_json(BUILTIN_TAXONOMY_JSON).expect("embedded skill taxonomy is valid")
});

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse taxonomy JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("taxonomy contains no technical skills")]
    Empty,
}

/// One named group of technical skill tokens (e.g. "databases").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// On-disk shape of the taxonomy file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyFile {
    pub technical_categories: Vec<TechnicalCategory>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
}

/// Immutable skill vocabulary with case-insensitive lookup tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TaxonomyFile", into = "TaxonomyFile")]
pub struct SkillTaxonomy {
    technical_categories: Vec<TechnicalCategory>,
    soft_skills: Vec<String>,
    /// lowercase token → index into `technical_categories`
    technical_index: HashMap<String, usize>,
    soft_index: HashMap<String, usize>,
}

impl TryFrom<TaxonomyFile> for SkillTaxonomy {
    type Error = TaxonomyError;

    fn try_from(file: TaxonomyFile) -> Result<Self, Self::Error> {
        let technical_categories: Vec<TechnicalCategory> = file
            .technical_categories
            .into_iter()
            .map(|c| TechnicalCategory {
                name: c.name.trim().to_string(),
                skills: normalize_tokens(c.skills),
            })
            .collect();
        let soft_skills = normalize_tokens(file.soft_skills);

        let mut technical_index = HashMap::new();
        for (idx, category) in technical_categories.iter().enumerate() {
            for skill in &category.skills {
                // First category wins when a token is listed twice.
                technical_index.entry(skill.clone()).or_insert(idx);
            }
        }
        if technical_index.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let soft_index = soft_skills
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();

        Ok(SkillTaxonomy {
            technical_categories,
            soft_skills,
            technical_index,
            soft_index,
        })
    }
}

impl From<SkillTaxonomy> for TaxonomyFile {
    fn from(taxonomy: SkillTaxonomy) -> Self {
        TaxonomyFile {
            technical_categories: taxonomy.technical_categories,
            soft_skills: taxonomy.soft_skills,
        }
    }
}

impl SkillTaxonomy {
    /// The vocabulary shipped with the service.
    pub fn builtin() -> &'static SkillTaxonomy {
        &BUILTIN
    }

    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    pub fn from_path(path: &Path) -> Result<Self, TaxonomyError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Loads the override file when one is configured, otherwise clones the built-in vocabulary.
    pub fn load(path: Option<&Path>) -> Result<Self, TaxonomyError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Ok(Self::builtin().clone()),
        }
    }

    pub fn categories(&self) -> &[TechnicalCategory] {
        &self.technical_categories
    }

    /// Every technical token, in category order then listing order.
    pub fn technical_skills(&self) -> impl Iterator<Item = &str> {
        self.technical_categories
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str))
    }

    pub fn soft_skills(&self) -> &[String] {
        &self.soft_skills
    }

    /// Category name for an exact (case-insensitive) technical token.
    pub fn category_of(&self, skill: &str) -> Option<&str> {
        self.technical_index
            .get(&skill.trim().to_lowercase())
            .map(|&idx| self.technical_categories[idx].name.as_str())
    }

    pub fn is_technical(&self, skill: &str) -> bool {
        self.category_of(skill).is_some()
    }

    pub fn is_soft(&self, skill: &str) -> bool {
        self.soft_index.contains_key(&skill.trim().to_lowercase())
    }
}

fn normalize_tokens(tokens: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.trim().to_lowercase();
        if !token.is_empty() && !out.contains(&token) {
            out.push(token);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_taxonomy_parses() {
        let taxonomy = SkillTaxonomy::builtin();
        assert_eq!(taxonomy.categories().len(), 6);
        assert!(taxonomy.technical_skills().count() >= 40);
        assert_eq!(taxonomy.soft_skills().len(), 15);
    }

    #[test]
    fn test_category_lookup_is_case_insensitive_exact() {
        let taxonomy = SkillTaxonomy::builtin();
        assert_eq!(taxonomy.category_of("PostgreSQL"), Some("databases"));
        assert_eq!(taxonomy.category_of("rust"), Some("programming"));
        assert_eq!(taxonomy.category_of("Power BI"), Some("data_science"));
        // No fuzzy matching at this layer
        assert_eq!(taxonomy.category_of("postgres"), None);
        assert_eq!(taxonomy.category_of("reactjs"), None);
    }

    #[test]
    fn test_soft_skill_lookup() {
        let taxonomy = SkillTaxonomy::builtin();
        assert!(taxonomy.is_soft("Leadership"));
        assert!(taxonomy.is_soft("time management"));
        assert!(!taxonomy.is_soft("python"));
        assert!(!taxonomy.is_technical("leadership"));
    }

    #[test]
    fn test_technical_skills_keep_listing_order() {
        let first: Vec<&str> = SkillTaxonomy::builtin().technical_skills().take(3).collect();
        assert_eq!(first, vec!["python", "java", "javascript"]);
    }

    #[test]
    fn test_custom_taxonomy_normalizes_tokens() {
        let json = r#"{
            "technical_categories": [
                {"name": "bio", "skills": [" CRISPR ", "crispr", "PCR"]}
            ],
            "soft_skills": ["Bench Discipline"]
        }"#;
        let taxonomy = SkillTaxonomy::from_json(json).unwrap();
        let skills: Vec<&str> = taxonomy.technical_skills().collect();
        assert_eq!(skills, vec!["crispr", "pcr"]);
        assert_eq!(taxonomy.category_of("Pcr"), Some("bio"));
        assert!(taxonomy.is_soft("bench discipline"));
    }

    #[test]
    fn test_empty_taxonomy_rejected() {
        let json = r#"{"technical_categories": [], "soft_skills": ["teamwork"]}"#;
        assert!(matches!(
            SkillTaxonomy::from_json(json),
            Err(TaxonomyError::Empty)
        ));
    }

    #[test]
    fn test_load_from_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"technical_categories": [{{"name": "ops", "skills": ["ansible"]}}]}}"#
        )
        .unwrap();

        let taxonomy = SkillTaxonomy::load(Some(file.path())).unwrap();
        assert_eq!(taxonomy.category_of("Ansible"), Some("ops"));
        assert!(taxonomy.soft_skills().is_empty());
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let taxonomy = SkillTaxonomy::load(None).unwrap();
        assert_eq!(taxonomy.category_of("docker"), Some("cloud"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SkillTaxonomy::from_path(Path::new("/nonexistent/taxonomy.json"));
        assert!(matches!(result, Err(TaxonomyError::Io(_))));
    }
}
