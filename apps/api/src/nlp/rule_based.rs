//! Rule-based `NlpProvider`: no model, no I/O, deterministic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::{EntityLabel, EntitySpan, NlpProvider, TextSpan};

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}[\p{L}'\-]*").expect("valid word regex"));

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("valid token regex"));

/// Clause delimiters for chunking. A chunk never crosses one of these.
static CLAUSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;:!?()\[\]{}|•·]|\.(?:\s|$)").expect("valid clause regex"));

const TRIM_CHARS: &[char] = &[
    '"', '\'', '“', '”', '‘', '’', '-', '–', '—', '*', '.', '•',
];

/// Words that mark a title-case run as an organisation rather than a person.
const ORG_MARKERS: &[&str] = &[
    "inc", "corp", "corporation", "ltd", "llc", "llp", "gmbh", "plc", "co",
    "company", "group", "university", "college", "institute", "school", "academy",
    "technologies", "technology", "solutions", "systems", "labs", "bank",
    "services", "consulting", "partners", "foundation",
];

/// Function words and common resume verbs. These end a noun-phrase chunk.
const CHUNK_BREAKERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "and", "or", "but", "nor",
    "of", "in", "on", "at", "to", "for", "from", "by", "with", "without", "within",
    "into", "onto", "over", "under", "about", "across", "through", "via", "per",
    "as", "than", "i", "me", "my", "we", "our", "us", "you", "your", "he", "she",
    "it", "its", "they", "their", "them", "who", "whom", "which", "what", "where",
    "when", "is", "are", "was", "were", "be", "been", "being", "am", "have", "has",
    "had", "having", "do", "does", "did", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must", "not", "no", "also", "very", "more",
    "most", "all", "any", "some", "such", "etc", "including", "using", "used",
    "led", "managed", "built", "developed", "designed", "created", "implemented",
    "improved", "delivered", "drove", "owned", "worked", "work", "working",
    "responsible", "handled", "supported", "maintained", "wrote", "reduced",
    "increased", "ensure", "ensured", "collaborate", "collaborated", "join",
];

/// Heuristic entity recognizer, chunker, and bigram similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedNlp;

impl RuleBasedNlp {
    pub fn new() -> Self {
        RuleBasedNlp
    }
}

impl NlpProvider for RuleBasedNlp {
    fn entities(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        for (offset, line) in lines_with_offsets(text) {
            // (start, end, word count, has org marker)
            let mut run: Option<(usize, usize, usize, bool)> = None;

            for word in WORD_RE.find_iter(line) {
                let contiguous = run
                    .map(|(_, end, _, _)| line[end..word.start()].chars().all(|c| c == ' ' || c == '\t'))
                    .unwrap_or(false);

                if is_title_case(word.as_str()) {
                    let is_org = is_org_marker(word.as_str());
                    run = match run {
                        Some((start, _, count, org)) if contiguous => {
                            Some((start, word.end(), count + 1, org || is_org))
                        }
                        other => {
                            flush_entity(&mut spans, line, offset, other);
                            Some((word.start(), word.end(), 1, is_org))
                        }
                    };
                } else {
                    flush_entity(&mut spans, line, offset, run.take());
                }
            }
            flush_entity(&mut spans, line, offset, run);
        }
        spans
    }

    fn noun_chunks(&self, text: &str) -> Vec<TextSpan> {
        let mut chunks = Vec::new();
        for (line_offset, line) in lines_with_offsets(text) {
            let mut clause_start = 0;
            let mut boundaries: Vec<(usize, usize)> = CLAUSE_RE
                .find_iter(line)
                .map(|m| {
                    let clause = (clause_start, m.start());
                    clause_start = m.end();
                    clause
                })
                .collect();
            boundaries.push((clause_start, line.len()));

            for (start, end) in boundaries {
                chunk_clause(&mut chunks, &line[start..end], line_offset + start);
            }
        }
        chunks
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a == b {
            return 1.0;
        }
        strsim::sorensen_dice(&a, &b).clamp(0.0, 1.0)
    }
}

fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split('\n').map(move |line| {
        let start = offset;
        offset += line.len() + 1;
        (start, line.trim_end_matches('\r'))
    })
}

fn flush_entity(
    spans: &mut Vec<EntitySpan>,
    line: &str,
    offset: usize,
    run: Option<(usize, usize, usize, bool)>,
) {
    if let Some((start, end, count, is_org)) = run {
        if (2..=4).contains(&count) {
            spans.push(EntitySpan {
                text: line[start..end].to_string(),
                label: if is_org {
                    EntityLabel::Organization
                } else {
                    EntityLabel::Person
                },
                start: offset + start,
                end: offset + end,
            });
        }
    }
}

fn chunk_clause(chunks: &mut Vec<TextSpan>, clause: &str, clause_offset: usize) {
    let mut run: Option<(usize, usize)> = None;

    for token in TOKEN_RE.find_iter(clause) {
        let raw = token.as_str();
        let trimmed = raw.trim_matches(TRIM_CHARS);
        let is_content = !trimmed.is_empty()
            && trimmed.chars().any(char::is_alphabetic)
            && !CHUNK_BREAKERS.contains(&trimmed.to_lowercase().as_str());

        if !is_content {
            flush_chunk(chunks, clause, clause_offset, run.take());
            continue;
        }

        let lead = raw.len() - raw.trim_start_matches(TRIM_CHARS).len();
        let start = token.start() + lead;
        let end = start + trimmed.len();
        run = match run {
            Some((run_start, _)) => Some((run_start, end)),
            None => Some((start, end)),
        };
    }
    flush_chunk(chunks, clause, clause_offset, run);
}

fn flush_chunk(chunks: &mut Vec<TextSpan>, clause: &str, offset: usize, run: Option<(usize, usize)>) {
    if let Some((start, end)) = run {
        chunks.push(TextSpan {
            text: clause[start..end].to_string(),
            start: offset + start,
            end: offset + end,
        });
    }
}

fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let rest: Vec<char> = chars.collect();
            !rest.is_empty() && rest.iter().all(|c| !c.is_uppercase())
        }
        _ => false,
    }
}

fn is_org_marker(word: &str) -> bool {
    let lower = word.trim_end_matches('.').to_lowercase();
    ORG_MARKERS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_entity_from_title_case_run() {
        let nlp = RuleBasedNlp::new();
        let entities = nlp.entities("Resume of Maria Elena Garcia\nSeattle");
        let people: Vec<&str> = entities
            .iter()
            .filter(|e| e.label == EntityLabel::Person)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(people, vec!["Maria Elena Garcia"]);
    }

    #[test]
    fn test_entity_offsets_point_into_source() {
        let text = "header line\nJohn Smith";
        let entities = RuleBasedNlp::new().entities(text);
        assert_eq!(entities.len(), 1);
        let e = &entities[0];
        assert_eq!(&text[e.start..e.end], "John Smith");
    }

    #[test]
    fn test_org_marker_labels_organization() {
        let entities = RuleBasedNlp::new().entities("Worked at Acme Technologies Inc");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, EntityLabel::Organization);
    }

    #[test]
    fn test_entity_runs_do_not_cross_punctuation() {
        let entities = RuleBasedNlp::new().entities("Seattle, Washington");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_single_title_word_is_not_entity() {
        assert!(RuleBasedNlp::new().entities("Python developer").is_empty());
    }

    #[test]
    fn test_noun_chunks_split_on_function_words() {
        let chunks = RuleBasedNlp::new().noun_chunks("Experience in software development and data analysis.");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Experience", "software development", "data analysis"]);
    }

    #[test]
    fn test_noun_chunks_split_on_clause_punctuation() {
        let chunks = RuleBasedNlp::new().noun_chunks("API design, product management");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["API design", "product management"]);
    }

    #[test]
    fn test_noun_chunk_offsets_point_into_source() {
        let text = "- led backend design\n* web development";
        for chunk in RuleBasedNlp::new().noun_chunks(text) {
            assert_eq!(&text[chunk.start..chunk.end], chunk.text);
        }
    }

    #[test]
    fn test_similarity_bounds() {
        let nlp = RuleBasedNlp::new();
        assert_eq!(nlp.similarity("Python", "python"), 1.0);
        assert_eq!(nlp.similarity("", "python"), 0.0);
        let s = nlp.similarity("python", "pytorch");
        assert!((0.0..0.8).contains(&s), "similarity was {s}");
    }

    #[test]
    fn test_similarity_close_spellings_score_high() {
        let s = RuleBasedNlp::new().similarity("postgresql", "postgre sql");
        assert!(s > 0.8, "similarity was {s}");
    }
}
