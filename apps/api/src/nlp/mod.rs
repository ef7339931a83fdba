//! NLP capability — the narrow seam between extraction/matching and whatever
//! language model backs it.
//!
//! Extraction only ever needs three things: person-like entity spans, noun
//! phrase chunks, and a pairwise similarity in [0, 1]. Anything that can answer
//! those (rules, a statistical tagger, an embedding model) implements
//! `NlpProvider` and is carried as `Arc<dyn NlpProvider>`.

pub mod rule_based;

use serde::{Deserialize, Serialize};

pub use rule_based::RuleBasedNlp;

/// Entity type assigned by the provider. Extraction only acts on `Person`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Organization,
    Other,
}

/// A labelled span of the input text. Offsets are byte offsets into that text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// An unlabelled span, used for noun-phrase chunks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Pluggable NLP backend. Implementations must be pure with respect to their
/// inputs: the engine calls them concurrently from several requests.
pub trait NlpProvider: Send + Sync {
    /// Named entities found in `text`, in document order.
    fn entities(&self, text: &str) -> Vec<EntitySpan>;

    /// Noun-phrase chunks found in `text`, in document order.
    fn noun_chunks(&self, text: &str) -> Vec<TextSpan>;

    /// Similarity between two short texts, in [0, 1].
    fn similarity(&self, a: &str, b: &str) -> f64;
}
