//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::interview::models::{
    AnswerScore, EvaluateRequest, EvaluationsResponse, GenerateRequest, ScoreRequest,
    SummaryRequest, SummaryResponse,
};
use crate::interview::questions::{
    generate_batch, generate_ideal, generate_question, BATCH_SIZE, DEFAULT_DIFFICULTIES,
};
use crate::interview::scoring::{evaluate_answers, score_answer};
use crate::interview::summary::summarize;
use crate::state::AppState;

const DEFAULT_JOB_CONTEXT: &str = "Software Developer";

/// Returns the trimmed value, or `None` for missing and blank fields.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// POST /api/generate
///
/// Dispatches on `action`: `generate_batch`, `generate_question`, `generate_ideal`.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<Value>, AppError> {
    let model = state.llm.as_deref();
    let job_context = non_blank(&request.job_context).unwrap_or(DEFAULT_JOB_CONTEXT);

    match request.action.as_deref() {
        Some("generate_batch") => {
            let difficulties: Vec<String> = match &request.difficulties {
                Some(list) if list.len() == BATCH_SIZE => list.clone(),
                Some(_) => {
                    return Err(AppError::Validation(format!(
                        "difficulties must list exactly {BATCH_SIZE} entries"
                    )))
                }
                None => DEFAULT_DIFFICULTIES.iter().map(|d| d.to_string()).collect(),
            };
            let job_description = request.job_description.as_deref().unwrap_or_default();
            let batch = generate_batch(model, job_context, job_description, &difficulties).await?;
            Ok(Json(serde_json::to_value(batch).map_err(anyhow::Error::from)?))
        }
        Some("generate_question") => {
            let difficulty = non_blank(&request.difficulty)
                .ok_or_else(|| AppError::Validation("difficulty is required".to_string()))?;
            Ok(Json(generate_question(model, difficulty, job_context).await))
        }
        Some("generate_ideal") => {
            let question = non_blank(&request.question)
                .ok_or_else(|| AppError::Validation("question is required".to_string()))?;
            Ok(Json(generate_ideal(model, question).await))
        }
        _ => Err(AppError::Validation("Invalid action".to_string())),
    }
}

/// POST /api/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<AnswerScore>, AppError> {
    let (Some(question), Some(ideal), Some(candidate_answer)) = (
        non_blank(&request.question),
        non_blank(&request.ideal),
        non_blank(&request.candidate_answer),
    ) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let score = score_answer(state.llm.as_deref(), question, ideal, candidate_answer).await;
    Ok(Json(score))
}

/// POST /api/evaluate-answers
pub async fn handle_evaluate_answers(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluationsResponse>, AppError> {
    if request.questions.is_empty() {
        return Err(AppError::Validation("No questions provided".to_string()));
    }
    let job_title = non_blank(&request.job_title).unwrap_or("Developer");

    let evaluations = evaluate_answers(state.llm.as_deref(), &request.questions, job_title).await;
    Ok(Json(evaluations))
}

/// POST /api/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    if request.answers.is_empty() {
        return Err(AppError::Validation("No answers provided".to_string()));
    }
    let candidate_name = non_blank(&request.candidate.name).unwrap_or("Unknown");
    let job_title = non_blank(&request.job.title).unwrap_or("Developer");

    let summary = summarize(
        state.llm.as_deref(),
        &request.answers,
        candidate_name,
        job_title,
    )
    .await;
    Ok(Json(summary))
}
