use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::matching::MatchingEngine;
use crate::nlp::{NlpProvider, RuleBasedNlp};
use crate::taxonomy::SkillTaxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub extractor: Arc<TextExtractor>,
    pub engine: Arc<MatchingEngine>,
}

impl AppState {
    /// Wires the extractor and engine around one taxonomy and one NLP provider.
    pub fn new(config: Config, taxonomy: Arc<SkillTaxonomy>, nlp: Arc<dyn NlpProvider>) -> Self {
        Self {
            config,
            extractor: Arc::new(TextExtractor::new(taxonomy, nlp.clone())),
            engine: Arc::new(MatchingEngine::new(nlp)),
        }
    }

    /// Loads the taxonomy named by the config (or the built-in one) and uses
    /// the rule-based NLP provider.
    pub fn from_config(config: Config) -> Result<Self> {
        let taxonomy = SkillTaxonomy::load(config.skill_taxonomy_path.as_deref())
            .context("failed to load skill taxonomy")?;
        Ok(Self::new(
            config,
            Arc::new(taxonomy),
            Arc::new(RuleBasedNlp::new()),
        ))
    }
}
