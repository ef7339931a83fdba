//! Candidate name extraction.
//!
//! Strategies run in a fixed order and the first plausible answer wins:
//! 1. email local-part (`jane.q.doe@...` → "Jane Q Doe")
//! 2. labelled line ("Name: ...") or a line that is only a 2–3 word name
//! 3. person entities from the NLP provider
//! 4. title-case lines among the first 10
//!
//! Falls back to "Unknown".

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::candidate::UNKNOWN_NAME;
use crate::nlp::{EntityLabel, NlpProvider};

/// Inputs shared by every strategy.
pub struct NameContext<'a> {
    pub text: &'a str,
    pub email: Option<&'a str>,
    pub nlp: &'a dyn NlpProvider,
}

pub type NameStrategy = fn(&NameContext<'_>) -> Option<String>;

/// Strategy chain in priority order.
pub const NAME_STRATEGIES: &[(&str, NameStrategy)] = &[
    ("email", name_from_email),
    ("labelled_line", name_from_labelled_line),
    ("person_entity", name_from_person_entity),
    ("leading_lines", name_from_leading_lines),
];

const LEADING_LINES_SCANNED: usize = 10;

/// Any of these (case-insensitive substring) disqualifies a name candidate.
const REJECT_KEYWORDS: &[&str] = &[
    "email", "phone", "mobile", "address", "resume", "cv", "objective", "summary",
    "experience", "education", "skills", "projects", "profile", "engineer", "developer",
    "manager", "analyst", "specialist", "director", "handling", "exception", "cloud",
    "technical", "development", "backend", "contact", "information", "certification",
    "reference", "curriculum", "vitae", "portfolio", "linkedin", "github",
];

/// Job titles and section words that NER tends to mislabel as people.
const JOB_TITLE_KEYWORDS: &[&str] = &[
    "engineer", "developer", "manager", "analyst", "specialist", "consultant", "director",
    "lead", "senior", "junior", "intern", "associate", "architect", "coordinator",
    "supervisor", "executive", "assistant", "officer", "technician", "administrator",
    "designer", "programmer", "scientist", "researcher", "handling", "exception", "cloud",
    "software", "technical", "development", "backend",
];

const SPECIAL_CHARS: &[char] = &[
    '@', '#', '$', '%', '&', '*', '+', '=', '|', '\\', '/', '<', '>', '(', ')', '[', ']',
    '{', '}',
];

static LABELLED_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i:\b(?:name|candidate|applicant))(?:[ \t]*:[ \t]*|[ \t]+)([A-Z][A-Za-z]+[ \t]+[A-Z][A-Za-z]+(?:[ \t]+[A-Z][A-Za-z]+)?)",
    )
    .expect("valid labelled name regex")
});

static NAME_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][A-Za-z]+[ \t]+[A-Z][A-Za-z]+(?:[ \t]+[A-Z][A-Za-z]+)?)[ \t]*\r?$")
        .expect("valid name line regex")
});

/// Runs the strategy chain; never fails.
pub fn extract_name(text: &str, email: Option<&str>, nlp: &dyn NlpProvider) -> String {
    let ctx = NameContext { text, email, nlp };
    for (label, strategy) in NAME_STRATEGIES {
        if let Some(name) = strategy(&ctx) {
            debug!(strategy = label, "name resolved");
            return name;
        }
    }
    UNKNOWN_NAME.to_string()
}

/// Plausibility gate applied to every strategy's candidate.
pub fn is_plausible_name(candidate: &str) -> bool {
    let candidate = candidate.trim();
    let char_count = candidate.chars().count();
    if !(3..=50).contains(&char_count) {
        return false;
    }
    if candidate.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let lower = candidate.to_lowercase();
    if REJECT_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return false;
    }
    let words: Vec<&str> = candidate.split_whitespace().collect();
    if !(2..=3).contains(&words.len()) {
        return false;
    }
    words
        .iter()
        .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}

pub fn name_from_email(ctx: &NameContext<'_>) -> Option<String> {
    let local = ctx.email?.split('@').next()?;
    if !local.contains('.') {
        return None;
    }
    let parts: Vec<&str> = local.split('.').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 || !parts.iter().all(|p| p.chars().all(char::is_alphabetic)) {
        return None;
    }
    let name = parts
        .iter()
        .map(|p| capitalize(p))
        .collect::<Vec<_>>()
        .join(" ");
    is_plausible_name(&name).then_some(name)
}

pub fn name_from_labelled_line(ctx: &NameContext<'_>) -> Option<String> {
    LABELLED_NAME_RE
        .captures_iter(ctx.text)
        .chain(NAME_LINE_RE.captures_iter(ctx.text))
        .filter_map(|caps| caps.get(1))
        .map(|m| normalize_spaces(m.as_str()))
        .find(|candidate| is_plausible_name(candidate))
}

pub fn name_from_person_entity(ctx: &NameContext<'_>) -> Option<String> {
    ctx.nlp
        .entities(ctx.text)
        .into_iter()
        .filter(|e| e.label == EntityLabel::Person)
        .map(|e| normalize_spaces(&e.text))
        .find(|candidate| {
            let lower = candidate.to_lowercase();
            candidate.split_whitespace().count() >= 2
                && !candidate.chars().any(|c| c.is_ascii_digit())
                && !JOB_TITLE_KEYWORDS.iter().any(|k| lower.contains(k))
                && is_plausible_name(candidate)
        })
}

pub fn name_from_leading_lines(ctx: &NameContext<'_>) -> Option<String> {
    ctx.text
        .lines()
        .take(LEADING_LINES_SCANNED)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains(SPECIAL_CHARS))
        .find(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            (2..=3).contains(&words.len())
                && words
                    .iter()
                    .filter(|w| w.chars().count() > 1)
                    .all(|w| is_title_word(w))
                && is_plausible_name(line)
        })
        .map(normalize_spaces)
}

fn is_title_word(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.all(char::is_lowercase)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{EntitySpan, RuleBasedNlp, TextSpan};

    /// Provider that reports a fixed entity list and nothing else.
    struct FixedEntities(Vec<EntitySpan>);

    impl NlpProvider for FixedEntities {
        fn entities(&self, _text: &str) -> Vec<EntitySpan> {
            self.0.clone()
        }
        fn noun_chunks(&self, _text: &str) -> Vec<TextSpan> {
            vec![]
        }
        fn similarity(&self, _a: &str, _b: &str) -> f64 {
            0.0
        }
    }

    fn person(text: &str) -> EntitySpan {
        EntitySpan {
            text: text.to_string(),
            label: EntityLabel::Person,
            start: 0,
            end: text.len(),
        }
    }

    fn ctx<'a>(text: &'a str, email: Option<&'a str>, nlp: &'a dyn NlpProvider) -> NameContext<'a> {
        NameContext { text, email, nlp }
    }

    #[test]
    fn test_name_from_email_keeps_initials() {
        let nlp = RuleBasedNlp::new();
        let c = ctx("", Some("anupam.n.kumar@example.com"), &nlp);
        assert_eq!(name_from_email(&c).as_deref(), Some("Anupam N Kumar"));
    }

    #[test]
    fn test_name_from_email_requires_dotted_words() {
        let nlp = RuleBasedNlp::new();
        assert_eq!(name_from_email(&ctx("", Some("jdoe@example.com"), &nlp)), None);
        assert_eq!(name_from_email(&ctx("", Some("john.doe99@example.com"), &nlp)), None);
        assert_eq!(name_from_email(&ctx("", None, &nlp)), None);
    }

    #[test]
    fn test_labelled_line() {
        let nlp = RuleBasedNlp::new();
        let text = "RESUME\nCandidate: Priya Raman\nPhone: 9876543210";
        assert_eq!(name_from_labelled_line(&ctx(text, None, &nlp)).as_deref(), Some("Priya Raman"));
    }

    #[test]
    fn test_whole_line_name() {
        let nlp = RuleBasedNlp::new();
        let text = "Professional Summary\nCarlos Mendez\nBackend Developer";
        assert_eq!(name_from_labelled_line(&ctx(text, None, &nlp)).as_deref(), Some("Carlos Mendez"));
    }

    #[test]
    fn test_entity_strategy_rejects_job_titles() {
        let nlp = FixedEntities(vec![person("Lead Architect"), person("Grace Hopper")]);
        let c = ctx("irrelevant", None, &nlp);
        assert_eq!(name_from_person_entity(&c).as_deref(), Some("Grace Hopper"));
    }

    #[test]
    fn test_entity_strategy_ignores_non_person_labels() {
        let nlp = FixedEntities(vec![EntitySpan {
            text: "Acme Corp".to_string(),
            label: EntityLabel::Organization,
            start: 0,
            end: 9,
        }]);
        assert_eq!(name_from_person_entity(&ctx("x", None, &nlp)), None);
    }

    #[test]
    fn test_leading_lines_strategy() {
        let nlp = FixedEntities(vec![]);
        let text = "  Ada  Lovelace  \nLondon";
        assert_eq!(name_from_leading_lines(&ctx(text, None, &nlp)).as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_plausibility_rules() {
        assert!(is_plausible_name("Jane Doe"));
        assert!(is_plausible_name("Anupam N Kumar"));
        assert!(!is_plausible_name("Jane"));
        assert!(!is_plausible_name("Jane Mary Ann Doe"));
        assert!(!is_plausible_name("Software Engineer"));
        assert!(!is_plausible_name("Jane Doe2"));
        assert!(!is_plausible_name("jane doe"));
        assert!(!is_plausible_name("Curriculum Vitae"));
    }

    #[test]
    fn test_chain_prefers_email() {
        let nlp = RuleBasedNlp::new();
        let text = "Johnny Appleseed\nSoftware Engineer";
        assert_eq!(
            extract_name(text, Some("john.appleseed@mail.com"), &nlp),
            "John Appleseed"
        );
    }

    #[test]
    fn test_chain_defaults_to_unknown() {
        let nlp = RuleBasedNlp::new();
        assert_eq!(extract_name("skills: rust, go\n2019-2023", None, &nlp), "Unknown");
        assert_eq!(extract_name("", None, &nlp), "Unknown");
    }
}
