//! Email and phone extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

/// Labelled phone values ("Phone: ...", "Mobile number: ..."), tried in order.
static LABELLED_PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:mobile|phone|cell|contact)[\s:]+(\+?[\d \t\-().]{10,15})",
        r"(?i)(?:mobile|phone)[\s\w]*?:\s*(\+?[\d \t\-().]{10,15})",
        r"(?i)(?:mobile|phone)\s*number[\s:]+(\+?[\d \t\-().]{10,15})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid labelled phone regex"))
    .collect()
});

/// Unlabelled numeric shapes, tried in order after the labelled ones.
static GENERIC_PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // 650-555-0123, 650.555.0123, 650 555 0123
        r"\b(\d{3}[-.\s]?\d{3}[-.\s]?\d{4})\b",
        // +91 98765xxxxx
        r"\b(\+?91[-.\s]?[6-9]\d{9})\b",
        // +91 98765 43210
        r"\b(\+?91[-.\s]?[6-9]\d{4}[-.\s]?\d{5})\b",
        // Indian mobile without country code
        r"\b([6-9]\d{9})\b",
        r"\b(\d{10})\b",
        // (650) 555-0123
        r"\((\d{3})\)[-.\s]?(\d{3})[-.\s]?(\d{4})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid phone regex"))
    .collect()
});

/// First email address in document order.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone number that normalizes to a 10-digit local number.
///
/// Labelled values win over bare numeric patterns.
pub fn extract_phone(text: &str) -> Option<String> {
    for re in LABELLED_PHONE_RES.iter() {
        for caps in re.captures_iter(text) {
            if let Some(phone) = caps.get(1).and_then(|m| normalize_phone(m.as_str())) {
                return Some(phone);
            }
        }
    }

    for re in GENERIC_PHONE_RES.iter() {
        for caps in re.captures_iter(text) {
            let joined: String = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .collect();
            if let Some(phone) = normalize_phone(&joined) {
                return Some(phone);
            }
        }
    }

    None
}

/// Strips non-digits and a leading "91" (12 digits) or "1" (11 digits).
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => Some(digits),
        12 if digits.starts_with("91") => Some(digits[2..].to_string()),
        11 if digits.starts_with('1') => Some(digits[1..].to_string()),
        _ => None,
    }
}
