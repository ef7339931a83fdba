//! Axum route handlers for the Extraction API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::validation::validate_job_description;
use crate::models::{CandidateFacts, JobFacts};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractCandidateRequest {
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeJobRequest {
    pub description: String,
    #[serde(default)]
    pub title: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/candidates/extract
///
/// Extracts candidate facts from already-decoded resume text.
pub async fn handle_extract_candidate(
    State(state): State<AppState>,
    Json(request): Json<ExtractCandidateRequest>,
) -> Result<Json<CandidateFacts>, AppError> {
    if request.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text cannot be empty".to_string()));
    }

    let extractor = state.extractor.clone();
    let facts = tokio::task::spawn_blocking(move || extractor.extract_candidate(&request.raw_text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))?;

    Ok(Json(facts))
}

/// POST /api/v1/jobs/analyze
///
/// Validates a job description, then returns categorized skills,
/// requirement lines and default skill weights.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJobRequest>,
) -> Result<Json<JobFacts>, AppError> {
    let check = validate_job_description(&request.description);
    if !check.passed {
        return Err(AppError::Validation(check.reason));
    }

    let extractor = state.extractor.clone();
    let AnalyzeJobRequest { description, title } = request;
    let mut job = tokio::task::spawn_blocking(move || extractor.analyze_job(&description))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in job analysis: {e}")))?;

    job.title = title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
    Ok(Json(job))
}
