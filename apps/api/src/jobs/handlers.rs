//! Axum route handlers for jobs and candidates.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::models::job::{Job, NewJob};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<Candidate>,
}

fn log_persistence_mode(state: &AppState, route: &str) {
    if state.config.persistence_configured() {
        info!("[{route}] Serving in-process data - remote persistence pending");
    } else {
        warn!("[{route}] Serving in-process data - persistence not configured");
    }
}

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobListResponse> {
    log_persistence_mode(&state, "GET /api/jobs");
    Json(JobListResponse {
        jobs: state.jobs.list().await,
    })
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<NewJob>,
) -> Result<Json<Job>, AppError> {
    let title = request
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Job title is required".to_string()))?;

    log_persistence_mode(&state, "POST /api/jobs");
    let job = state
        .jobs
        .create(title, request.description, request.custom_questions)
        .await;
    info!("Created job {} '{}'", job.id, job.title);
    Ok(Json(job))
}

/// GET /api/candidates/:job_id
///
/// Known jobs get the sample roster; unknown ids get an empty list.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> Json<CandidateListResponse> {
    let candidates = if state.jobs.exists(job_id).await {
        Candidate::sample_for_job(job_id)
    } else {
        vec![]
    };
    Json(CandidateListResponse { candidates })
}
