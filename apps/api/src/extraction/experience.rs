//! Years-of-experience extraction for resumes and job requirements.

use once_cell::sync::Lazy;
use regex::Regex;

/// "5 years of experience", "3+ yrs exp", "10-years experience".
static CANDIDATE_YEARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)[\s\-+]*(?:years?|yrs?)\s*(?:of\s+)?(?:experience|exp)")
        .expect("valid experience regex")
});

/// Four-digit years 1900–2099. No word boundaries: "FY2019" counts, and so
/// does a 19xx/20xx run embedded in a longer number.
static CALENDAR_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:19|20)\d{2}").expect("valid year regex"));

/// Requirement phrasings in job descriptions.
static REQUIRED_YEARS_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\+?\s*years?\s+(?:of\s+)?experience",
        r"(\d+)\+?\s*years?\s+(?:of\s+)?(?:relevant\s+)?(?:professional\s+)?experience",
        r"minimum\s+(?:of\s+)?(\d+)\+?\s+years?",
        r"at\s+least\s+(\d+)\+?\s+years?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid required-experience regex"))
    .collect()
});

/// Largest stated "N years of experience" in the text.
///
/// When nothing is stated, falls back to the span between the earliest and
/// latest calendar year mentioned. That fallback is a rough proxy: a birth
/// year or an unrelated citation will inflate it.
pub fn extract_experience_years(text: &str) -> u32 {
    let lower = text.to_lowercase();
    if let Some(stated) = max_capture(&CANDIDATE_YEARS_RE, &lower) {
        return stated;
    }
    year_span(text)
}

/// Largest required-years figure stated in a job description, 0 if none.
pub fn extract_required_years(job_text: &str) -> u32 {
    let lower = job_text.to_lowercase();
    REQUIRED_YEARS_RES
        .iter()
        .filter_map(|re| max_capture(re, &lower))
        .max()
        .unwrap_or(0)
}

/// `max - min` over all calendar years in the text, 0 if fewer than two.
pub fn year_span(text: &str) -> u32 {
    let years: Vec<u32> = CALENDAR_YEAR_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    match (years.iter().min(), years.iter().max()) {
        (Some(min), Some(max)) => max - min,
        _ => 0,
    }
}

fn max_capture(re: &Regex, text: &str) -> Option<u32> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stated_years_take_maximum() {
        let text = "3 years of experience in Java.\n7+ years experience overall. 2 yrs exp with Go";
        assert_eq!(extract_experience_years(text), 7);
    }

    #[test]
    fn test_stated_years_case_insensitive() {
        assert_eq!(extract_experience_years("Over 12 Years of Experience"), 12);
    }

    #[test]
    fn test_year_span_fallback() {
        let text = "Acme Corp 2015 - 2019\nGlobex 2019 - 2023";
        assert_eq!(extract_experience_years(text), 8);
    }

    #[test]
    fn test_year_span_matches_prefixed_and_embedded_years() {
        assert_eq!(year_span("FY2019 to FY2023 at Acme"), 4);
        // "120199" yields 2019 from its middle digits
        assert_eq!(year_span("Born 1885; ticket 120199; worked 2020"), 1);
        assert_eq!(year_span("Born 1885"), 0);
    }

    #[test]
    fn test_fiscal_year_range_falls_back_to_span() {
        assert_eq!(extract_experience_years("Name:\nJohn Doe\nFY2019 to FY2023 at Acme"), 4);
    }

    #[test]
    fn test_no_signal_is_zero() {
        assert_eq!(extract_experience_years("Enthusiastic learner"), 0);
        assert_eq!(extract_experience_years(""), 0);
    }

    #[test]
    fn test_required_years_patterns() {
        assert_eq!(extract_required_years("We need 5+ years of experience with Rust"), 5);
        assert_eq!(extract_required_years("Minimum 3 years in backend roles"), 3);
        assert_eq!(extract_required_years("at least 4 years building APIs"), 4);
        assert_eq!(
            extract_required_years("6 years of professional experience preferred"),
            6
        );
    }

    #[test]
    fn test_required_years_max_across_patterns() {
        let jd = "3+ years experience with SQL. Minimum 6 years overall.";
        assert_eq!(extract_required_years(jd), 6);
    }

    #[test]
    fn test_required_years_absent() {
        assert_eq!(extract_required_years("Great team, remote friendly"), 0);
    }
}
