use serde::{Deserialize, Serialize};

const MIN_DESCRIPTION_CHARS: usize = 50;
const MIN_SIGNAL_STEMS: usize = 2;

/// Stems that a usable job description mentions at least twice over.
const JOB_SIGNAL_STEMS: &[&str] = &["experience", "skill", "require", "qualif", "responsib"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionCheck {
    pub passed: bool,
    pub reason: String,
    pub found_stems: Vec<String>,
}

/// Checks that a job description is long enough and talks about requirements.
///
/// PASS conditions:
/// - At least 50 characters after trimming
/// - Mentions at least 2 of: experience, skill, require, qualif, responsib
pub fn validate_job_description(text: &str) -> JobDescriptionCheck {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();
    let found_stems: Vec<String> = JOB_SIGNAL_STEMS
        .iter()
        .filter(|stem| lower.contains(**stem))
        .map(|stem| stem.to_string())
        .collect();

    if trimmed.chars().count() < MIN_DESCRIPTION_CHARS {
        return JobDescriptionCheck {
            passed: false,
            reason: format!(
                "Job description must be at least {MIN_DESCRIPTION_CHARS} characters long"
            ),
            found_stems,
        };
    }

    if found_stems.len() < MIN_SIGNAL_STEMS {
        return JobDescriptionCheck {
            passed: false,
            reason: "Job description should include information about requirements, skills, or qualifications".to_string(),
            found_stems,
        };
    }

    JobDescriptionCheck {
        passed: true,
        reason: "Valid job description".to_string(),
        found_stems,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_with_requirements_and_experience() {
        let jd = "Backend Engineer. Requirements: 5 years of experience with Rust and distributed systems.";
        let check = validate_job_description(jd);
        assert!(check.passed);
        assert_eq!(check.found_stems, vec!["experience", "require"]);
    }

    #[test]
    fn test_fail_too_short() {
        let check = validate_job_description("Rust dev, skills required");
        assert!(!check.passed);
        assert!(check.reason.contains("50 characters"));
    }

    #[test]
    fn test_fail_whitespace_padding_does_not_count() {
        let padded = format!("{}skills required{}", " ".repeat(40), " ".repeat(40));
        assert!(!validate_job_description(&padded).passed);
    }

    #[test]
    fn test_fail_without_signal_words() {
        let jd = "We are a friendly company in a sunny city looking for a new colleague to join us soon.";
        let check = validate_job_description(jd);
        assert!(!check.passed);
        assert!(check.reason.contains("requirements, skills, or qualifications"));
    }

    #[test]
    fn test_fail_with_single_signal_word() {
        let jd = "We are a friendly company in a sunny city looking for someone with experience.";
        assert!(!validate_job_description(jd).passed);
    }

    #[test]
    fn test_stems_match_inflections() {
        let jd = "Qualifications: strong skills. Responsibilities include owning the roadmap end to end.";
        let check = validate_job_description(jd);
        assert!(check.passed);
        assert_eq!(check.found_stems, vec!["skill", "qualif", "responsib"]);
    }
}
