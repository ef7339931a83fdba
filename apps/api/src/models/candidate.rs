use serde::{Deserialize, Serialize};

use crate::models::skill_set::SkillSet;

pub const UNKNOWN_NAME: &str = "Unknown";

/// Structured facts extracted from a resume.
///
/// Every field is always present; missing signals are represented by
/// `"Unknown"`, `None`, `0` or an empty list rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateFacts {
    pub name: String,
    pub email: Option<String>,
    /// 10-digit local form when a known country code was stripped.
    pub phone: Option<String>,
    pub skills: SkillSet,
    pub experience_years: u32,
    /// Raw matching lines, document order.
    pub education: Vec<String>,
    /// One joined block per work-experience section.
    pub work_experience: Vec<String>,
    /// Text the facts were extracted from; read by semantic scoring.
    #[serde(default)]
    pub raw_text: String,
}

impl Default for CandidateFacts {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            email: None,
            phone: None,
            skills: SkillSet::new(),
            experience_years: 0,
            education: Vec::new(),
            work_experience: Vec::new(),
            raw_text: String::new(),
        }
    }
}
