use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`. Which fields matter depends on `action`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    pub action: Option<String>,
    pub difficulty: Option<String>,
    pub job_context: Option<String>,
    /// `generate_batch` only.
    pub job_description: Option<String>,
    /// `generate_batch` only; defaults to two each of easy, medium, hard.
    pub difficulties: Option<Vec<String>>,
    /// `generate_ideal` only.
    pub question: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedQuestion {
    pub question: String,
    pub ideal_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBatch {
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    pub question: Option<String>,
    pub ideal: Option<String>,
    pub candidate_answer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerScore {
    pub score: u8,
    pub reason: String,
}

/// One question/answer pair submitted for whole-interview grading.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnswerForEvaluation {
    pub question: String,
    pub ideal_answer: String,
    pub candidate_answer: String,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub questions: Vec<AnswerForEvaluation>,
    pub job_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EvaluationsResponse {
    pub evaluations: Vec<AnswerScore>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoredAnswer {
    pub question: String,
    pub candidate_answer: String,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CandidateInfo {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobInfo {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub answers: Vec<ScoredAnswer>,
    #[serde(default)]
    pub candidate: CandidateInfo,
    #[serde(default)]
    pub job: JobInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryResponse {
    pub final_score: f64,
    pub summary: String,
}
