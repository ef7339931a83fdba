//! Semantic component: TF-IDF cosine similarity between two documents.
//!
//! The vocabulary is fitted from exactly the two documents on every call.
//! Nothing is cached between calls.

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

pub const MAX_FEATURES: usize = 1000;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together",
    "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up",
    "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Lowercased tokens of two or more word characters, stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !STOP_WORDS.contains(t))
        .map(String::from)
        .collect()
}

/// Cosine similarity in [0, 1] of the two documents' TF-IDF vectors.
///
/// `None` when the fitted vocabulary is empty (e.g. only stop words).
pub fn tfidf_cosine(a: &str, b: &str) -> Option<f64> {
    let docs = [count_terms(&tokenize(a)), count_terms(&tokenize(b))];

    let mut corpus_freq: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in &docs {
        for (term, count) in doc {
            *corpus_freq.entry(term.as_str()).or_default() += count;
        }
    }
    if corpus_freq.is_empty() {
        return None;
    }

    // Most frequent terms first; BTreeMap order breaks ties alphabetically.
    let mut ranked: Vec<(&str, usize)> = corpus_freq.into_iter().collect();
    ranked.sort_by(|x, y| y.1.cmp(&x.1));
    ranked.truncate(MAX_FEATURES);

    let n_docs = docs.len() as f64;
    let vectors: Vec<Vec<f64>> = docs
        .iter()
        .map(|doc| {
            let raw: Vec<f64> = ranked
                .iter()
                .map(|(term, _)| {
                    let tf = doc.get(*term).copied().unwrap_or(0) as f64;
                    let df = docs.iter().filter(|d| d.contains_key(*term)).count() as f64;
                    let idf = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
                    tf * idf
                })
                .collect();
            l2_normalize(raw)
        })
        .collect();

    let dot: f64 = vectors[0].iter().zip(&vectors[1]).map(|(x, y)| x * y).sum();
    Some(dot.clamp(0.0, 1.0))
}

/// 0–100. Empty input or an empty vocabulary scores 0.
pub fn semantic_score(candidate_text: &str, job_text: &str) -> f64 {
    if candidate_text.trim().is_empty() || job_text.trim().is_empty() {
        return 0.0;
    }
    match tfidf_cosine(candidate_text, job_text) {
        Some(similarity) => similarity * 100.0,
        None => {
            warn!("semantic similarity unavailable: empty vocabulary");
            0.0
        }
    }
}

fn count_terms(tokens: &[String]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

fn l2_normalize(mut vector: Vec<f64>) -> Vec<f64> {
    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        vector.iter_mut().for_each(|x| *x /= norm);
    }
    vector
}
