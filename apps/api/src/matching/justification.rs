//! Human-readable justification built from fixed sentence templates.

const GAPS_LISTED_IN_FULL: usize = 2;
const GAPS_SHOWN_WHEN_MANY: usize = 3;

fn skill_sentence(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent skill match - candidate has most required skills"
    } else if score >= 60.0 {
        "Good skill match - candidate has many required skills"
    } else if score >= 40.0 {
        "Moderate skill match - candidate has some required skills"
    } else {
        "Limited skill match - candidate lacks many required skills"
    }
}

fn experience_sentence(score: f64) -> &'static str {
    if score >= 80.0 {
        "Strong experience match"
    } else if score >= 60.0 {
        "Adequate experience level"
    } else {
        "Experience below requirements"
    }
}

fn education_sentence(score: f64) -> &'static str {
    if score >= 80.0 {
        "Education requirements met or exceeded"
    } else if score >= 50.0 {
        "Acceptable education background"
    } else {
        "Education below typical requirements"
    }
}

fn gap_sentence(gaps: &[String]) -> Option<String> {
    match gaps.len() {
        0 => None,
        n if n <= GAPS_LISTED_IN_FULL => Some(format!("Minor skill gaps: {}", gaps.join(", "))),
        _ => Some(format!(
            "Several skill gaps including: {}",
            gaps[..GAPS_SHOWN_WHEN_MANY].join(", ")
        )),
    }
}

/// Sentences for skill, experience and education bands plus a gap clause,
/// joined with ". ".
pub fn build_justification(skill: f64, experience: f64, education: f64, gaps: &[String]) -> String {
    let mut sentences = vec![
        skill_sentence(skill).to_string(),
        experience_sentence(experience).to_string(),
        education_sentence(education).to_string(),
    ];
    sentences.extend(gap_sentence(gaps));
    sentences.join(". ")
}
