//! Experience component: candidate years against the years a job asks for.

/// Score when candidate years exactly meet the requirement.
const MEETS_REQUIREMENT: f64 = 80.0;
const BONUS_PER_EXTRA_YEAR: f64 = 5.0;
const MAX_BONUS: f64 = 30.0;
const PENALTY_PER_MISSING_YEAR: f64 = 15.0;
/// Score when the job states no requirement.
pub const NEUTRAL_EXPERIENCE_SCORE: f64 = 50.0;

/// 0–100. `required_years == 0` means the job states no requirement.
pub fn experience_score(candidate_years: u32, required_years: u32) -> f64 {
    if required_years == 0 {
        return NEUTRAL_EXPERIENCE_SCORE;
    }

    if candidate_years >= required_years {
        let excess = f64::from(candidate_years - required_years);
        let bonus = (excess * BONUS_PER_EXTRA_YEAR).min(MAX_BONUS);
        (MEETS_REQUIREMENT + bonus).min(100.0)
    } else {
        let deficit = f64::from(required_years - candidate_years);
        (MEETS_REQUIREMENT - deficit * PENALTY_PER_MISSING_YEAR).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_requirement_is_eighty() {
        for years in [1, 3, 5, 12] {
            assert_eq!(experience_score(years, years), 80.0);
        }
    }

    #[test]
    fn test_one_year_over_and_under() {
        assert_eq!(experience_score(6, 5), 85.0);
        assert_eq!(experience_score(4, 5), 65.0);
    }

    #[test]
    fn test_bonus_capped_at_hundred() {
        assert_eq!(experience_score(9, 5), 100.0);
        assert_eq!(experience_score(30, 5), 100.0);
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        assert_eq!(experience_score(0, 5), 5.0);
        assert_eq!(experience_score(0, 6), 0.0);
        assert_eq!(experience_score(1, 15), 0.0);
    }

    #[test]
    fn test_no_requirement_is_neutral() {
        assert_eq!(experience_score(0, 0), 50.0);
        assert_eq!(experience_score(20, 0), 50.0);
    }
}
