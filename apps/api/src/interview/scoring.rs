//! Answer scoring: per-answer scores and whole-interview evaluation.

use rand::Rng;
use serde_json::Value;
use tracing::warn;

use crate::interview::models::{AnswerForEvaluation, AnswerScore, EvaluationsResponse};
use crate::interview::prompts::{
    EVALUATE_ANSWERS_PROMPT, EVALUATION_QUESTION_BLOCK, SCORE_ANSWER_PROMPT,
};
use crate::llm_client::prompts::fill;
use crate::llm_client::{parse_json, LanguageModel, DEFAULT_MAX_TOKENS};

const EVALUATION_MAX_TOKENS: u32 = 1500;

/// Reads a model-supplied score that may arrive as an integer, float, or numeric string.
fn coerce_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn clamp_score(score: i64, min: u8, max: u8) -> u8 {
    score.clamp(min as i64, max as i64) as u8
}

/// Scores one answer from 1 to 10. Falls back to a random passing score when the
/// model is unavailable or its reply is unusable.
pub async fn score_answer(
    model: Option<&dyn LanguageModel>,
    question: &str,
    ideal: &str,
    candidate_answer: &str,
) -> AnswerScore {
    if let Some(model) = model {
        let prompt = fill(
            SCORE_ANSWER_PROMPT,
            &[
                ("question", question),
                ("ideal", ideal),
                ("candidate_answer", candidate_answer),
            ],
        );
        match model.complete(&prompt, DEFAULT_MAX_TOKENS).await {
            Ok(text) => match parse_model_score(&text) {
                Some(score) => return score,
                None => warn!("Unusable score reply, using mock: {text}"),
            },
            Err(e) => warn!("Scoring failed, using mock: {e}"),
        }
    }

    AnswerScore {
        score: rand::thread_rng().gen_range(6..=10),
        reason: "Candidate demonstrated good understanding of the concept".to_string(),
    }
}

fn parse_model_score(text: &str) -> Option<AnswerScore> {
    let reply: Value = parse_json(text).ok()?;
    let score = match reply.get("score") {
        Some(v) => coerce_score(v)?,
        None => 5,
    };
    let reason = reply
        .get("reason")
        .and_then(Value::as_str)
        .unwrap_or("Good understanding demonstrated")
        .to_string();
    Some(AnswerScore {
        score: clamp_score(score, 1, 10),
        reason,
    })
}

/// Grades every answer of an interview in one model call, 0 to 10 each. Falls back
/// to [`heuristic_evaluation`] when the model is unavailable or its reply is unusable.
pub async fn evaluate_answers(
    model: Option<&dyn LanguageModel>,
    questions: &[AnswerForEvaluation],
    job_title: &str,
) -> EvaluationsResponse {
    if let Some(model) = model {
        let questions_text: String = questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                fill(
                    EVALUATION_QUESTION_BLOCK,
                    &[
                        ("index", &(i + 1).to_string()),
                        (
                            "difficulty",
                            &q.difficulty.as_deref().unwrap_or("medium").to_uppercase(),
                        ),
                        ("question", &q.question),
                        ("ideal_answer", &q.ideal_answer),
                        ("candidate_answer", &q.candidate_answer),
                    ],
                )
            })
            .collect();
        let prompt = fill(
            EVALUATE_ANSWERS_PROMPT,
            &[("job_title", job_title), ("questions_text", &questions_text)],
        );

        match model.complete(&prompt, EVALUATION_MAX_TOKENS).await {
            Ok(text) => match parse_model_evaluations(&text, questions.len()) {
                Some(evaluations) => return EvaluationsResponse { evaluations },
                None => warn!("Unusable evaluation reply, using heuristic: {text}"),
            },
            Err(e) => warn!("Evaluation failed, using heuristic: {e}"),
        }
    }

    EvaluationsResponse {
        evaluations: questions.iter().map(heuristic_evaluation).collect(),
    }
}

/// One evaluation per question: short replies are padded with zero scores, extras dropped.
fn parse_model_evaluations(text: &str, expected: usize) -> Option<Vec<AnswerScore>> {
    let reply: Value = parse_json(text).ok()?;
    let items: &[Value] = match reply.get("evaluations") {
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => return None,
        None => &[],
    };

    let mut evaluations = Vec::with_capacity(expected);
    for item in items.iter().take(expected) {
        let score = match item.get("score") {
            Some(v) => coerce_score(v)?,
            None => 0,
        };
        let reason = item
            .get("reason")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        evaluations.push(AnswerScore {
            score: clamp_score(score, 0, 10),
            reason,
        });
    }
    while evaluations.len() < expected {
        evaluations.push(AnswerScore {
            score: 0,
            reason: "Evaluation failed".to_string(),
        });
    }
    Some(evaluations)
}

/// Length-based grade used when no model is available.
pub fn heuristic_evaluation(answer: &AnswerForEvaluation) -> AnswerScore {
    let len = answer.candidate_answer.trim().chars().count();
    let (score, reason) = match len {
        0..=9 => (0, "No meaningful answer provided"),
        10..=29 => (3, "Answer too brief, lacks detail"),
        30..=99 => (5, "Basic understanding shown"),
        _ => (6, "Adequate response provided"),
    };
    AnswerScore {
        score,
        reason: reason.to_string(),
    }
}
