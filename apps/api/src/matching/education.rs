//! Education component: highest degree level mentioned on each side.

/// Level keywords and their rank. The highest rank present wins.
const EDUCATION_LEVELS: &[(&str, u32)] = &[
    ("phd", 100),
    ("doctorate", 100),
    ("master", 80),
    ("bachelor", 60),
    ("associate", 40),
    ("diploma", 30),
    ("certificate", 20),
];

pub const NEUTRAL_EDUCATION_SCORE: f64 = 50.0;
/// Score when the job names a level and the candidate shows none.
pub const NO_EDUCATION_SCORE: f64 = 20.0;

/// Highest-ranked level keyword in `text`, 0 if none.
pub fn education_level(text: &str) -> u32 {
    let lower = text.to_lowercase();
    EDUCATION_LEVELS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, rank)| rank)
        .max()
        .unwrap_or(0)
}

/// 0–100 comparing the candidate's best level with the job's highest stated level.
pub fn education_score(candidate_education: &[String], job_text: &str) -> f64 {
    let required = education_level(job_text);
    if required == 0 {
        return NEUTRAL_EDUCATION_SCORE;
    }

    let candidate = candidate_education
        .iter()
        .map(|line| education_level(line))
        .max()
        .unwrap_or(0);

    if candidate >= required {
        100.0
    } else if candidate > 0 {
        f64::from(candidate) / f64::from(required) * 100.0
    } else {
        NO_EDUCATION_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_level_takes_highest_keyword() {
        assert_eq!(education_level("Bachelor's degree, Master's preferred"), 80);
        assert_eq!(education_level("PhD in Physics"), 100);
        assert_eq!(education_level("Self taught"), 0);
    }

    #[test]
    fn test_master_exceeds_bachelor_requirement() {
        let score = education_score(
            &lines(&["Master's degree in Computer Science"]),
            "Bachelor degree in a technical field required",
        );
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_below_requirement_is_proportional() {
        let score = education_score(&lines(&["Bachelor of Arts"]), "Master's degree required");
        assert!((score - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_candidate_level() {
        let score = education_score(&lines(&["Coursework at State University"]), "PhD required");
        assert_eq!(score, 20.0);
        assert_eq!(education_score(&[], "PhD required"), 20.0);
    }

    #[test]
    fn test_no_job_level_is_neutral() {
        assert_eq!(education_score(&lines(&["PhD, MIT"]), "Strong Rust skills"), 50.0);
    }
}
