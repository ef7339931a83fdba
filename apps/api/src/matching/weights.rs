//! Component weights for the overall score and per-skill weight overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::matching::MatchError;

/// Weight used for a skill that has neither a job default nor an override.
pub const UNSPECIFIED_SKILL_WEIGHT: f64 = 1.0;

/// Replacement for an override value that is not a usable number.
pub const FALLBACK_OVERRIDE_WEIGHT: f64 = 0.5;

/// How much each component contributes to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub semantic: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.3,
            education: 0.2,
            semantic: 0.1,
        }
    }
}

impl ComponentWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.semantic
    }

    /// Every weight must be finite and non-negative, and at least one positive.
    pub fn validate(&self) -> Result<(), MatchError> {
        for (name, value) in [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("semantic", self.semantic),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidWeight {
                    name: name.to_string(),
                    value,
                });
            }
        }
        let sum = self.sum();
        if sum <= 0.0 {
            return Err(MatchError::InvalidWeight {
                name: "sum".to_string(),
                value: sum,
            });
        }
        Ok(())
    }

    /// skills·w + experience·w + education·w + semantic·w
    pub fn combine(&self, skill: f64, experience: f64, education: f64, semantic: f64) -> f64 {
        skill * self.skills
            + experience * self.experience
            + education * self.education
            + semantic * self.semantic
    }
}

/// Turns caller-supplied JSON weights into clean per-skill weights in [0, 1].
///
/// Numbers (or numeric strings) are clamped; anything else becomes 0.5.
pub fn normalize_overrides(raw: &BTreeMap<String, Value>) -> BTreeMap<String, f64> {
    raw.iter()
        .filter(|(skill, _)| !skill.trim().is_empty())
        .map(|(skill, value)| {
            let parsed = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            let weight = match parsed {
                Some(w) if w.is_finite() => w.clamp(0.0, 1.0),
                _ => {
                    warn!(skill = %skill, value = %value, "invalid skill weight, using fallback");
                    FALLBACK_OVERRIDE_WEIGHT
                }
            };
            (skill.trim().to_string(), weight)
        })
        .collect()
}

/// Job defaults with the overrides laid on top. Override wins per skill,
/// whatever its casing.
pub fn merge_weights(
    defaults: &BTreeMap<String, f64>,
    overrides: Option<&BTreeMap<String, f64>>,
) -> BTreeMap<String, f64> {
    let mut merged = defaults.clone();
    if let Some(overrides) = overrides {
        for (skill, weight) in overrides {
            let key = skill.to_lowercase();
            merged.retain(|existing, _| existing.to_lowercase() != key);
            merged.insert(skill.clone(), *weight);
        }
    }
    merged
}

/// Weight for `skill`: exact key first, then a case-insensitive key, then 1.0.
pub fn weight_for(weights: &BTreeMap<String, f64>, skill: &str) -> f64 {
    weights
        .get(skill)
        .or_else(|| {
            let needle = skill.to_lowercase();
            weights
                .iter()
                .find(|(k, _)| k.to_lowercase() == needle)
                .map(|(_, w)| w)
        })
        .copied()
        .unwrap_or(UNSPECIFIED_SKILL_WEIGHT)
}

/// Clamps stored per-skill weights into [0, 1]. Non-finite values fall back to 0.5.
pub fn clamp_weights(weights: &mut BTreeMap<String, f64>) {
    for (skill, weight) in weights.iter_mut() {
        if weight.is_finite() {
            *weight = weight.clamp(0.0, 1.0);
        } else {
            warn!(skill = %skill, "non-finite skill weight, using fallback");
            *weight = FALLBACK_OVERRIDE_WEIGHT;
        }
    }
}
