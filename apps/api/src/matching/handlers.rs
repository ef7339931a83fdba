//! Axum route handlers for the Matching API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::matching::weights::{clamp_weights, normalize_overrides};
use crate::models::{CandidateFacts, JobFacts, MatchResult};
use crate::state::AppState;

const MAX_RANKED_CANDIDATES: usize = 500;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreMatchRequest {
    pub candidate: CandidateFacts,
    /// `skill_weights` are clamped into [0, 1] before scoring.
    pub job: JobFacts,
    /// Per-skill overrides. Values are normalized, not rejected.
    #[serde(default)]
    pub weights: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub struct RankCandidatesRequest {
    pub job: JobFacts,
    pub candidates: Vec<CandidateFacts>,
    #[serde(default)]
    pub weights: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Serialize)]
pub struct RankedCandidate {
    /// Position of the candidate in the request.
    pub index: usize,
    pub name: String,
    pub result: MatchResult,
}

#[derive(Debug, Serialize)]
pub struct RankCandidatesResponse {
    pub ranked: Vec<RankedCandidate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches/score
///
/// Scores one candidate against one job. Scoring failures come back as the
/// zeroed result, not as an HTTP error.
pub async fn handle_score_match(
    State(state): State<AppState>,
    Json(mut request): Json<ScoreMatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    clamp_weights(&mut request.job.skill_weights);
    let overrides = request.weights.as_ref().map(normalize_overrides);
    let engine = state.engine.clone();

    let result = tokio::task::spawn_blocking(move || {
        engine.score(&request.candidate, &request.job, overrides.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in scoring: {e}")))?;

    Ok(Json(result))
}

/// POST /api/v1/matches/rank
///
/// Rescores every candidate of a job under the given weights, best first.
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Json(mut request): Json<RankCandidatesRequest>,
) -> Result<Json<RankCandidatesResponse>, AppError> {
    if request.candidates.is_empty() {
        return Err(AppError::Validation("candidates cannot be empty".to_string()));
    }
    if request.candidates.len() > MAX_RANKED_CANDIDATES {
        return Err(AppError::UnprocessableEntity(format!(
            "at most {MAX_RANKED_CANDIDATES} candidates can be ranked per request"
        )));
    }

    clamp_weights(&mut request.job.skill_weights);
    let overrides = request.weights.as_ref().map(normalize_overrides);
    let engine = state.engine.clone();

    let ranked = tokio::task::spawn_blocking(move || {
        engine
            .rank_candidates(&request.job, &request.candidates, overrides.as_ref())
            .into_iter()
            .map(|(index, result)| RankedCandidate {
                index,
                name: request.candidates[index].name.clone(),
                result,
            })
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in ranking: {e}")))?;

    Ok(Json(RankCandidatesResponse { ranked }))
}
