//! Question generation: batch, single question, and ideal answer.
//!
//! Single-question and ideal-answer generation never fail: any model problem falls back
//! to a canned response. Batch generation has no canned equivalent, so it reports
//! failure and the client switches to per-question calls.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::models::{GeneratedQuestion, QuestionBatch};
use crate::interview::prompts::{
    BATCH_QUESTIONS_PROMPT, IDEAL_ANSWER_PROMPT, SINGLE_QUESTION_PROMPT,
};
use crate::llm_client::prompts::{fill, DIFFICULTY_GUIDELINES};
use crate::llm_client::{parse_json, LanguageModel, DEFAULT_MAX_TOKENS};

pub const BATCH_SIZE: usize = 6;
pub const DEFAULT_DIFFICULTIES: [&str; BATCH_SIZE] =
    ["easy", "easy", "medium", "medium", "hard", "hard"];
pub const BATCH_FAILED_MESSAGE: &str = "Batch generation failed, use individual calls";

const BATCH_MAX_TOKENS: u32 = 2000;
const QUESTION_MAX_TOKENS: u32 = 300;

/// Seconds a candidate gets to answer at each difficulty.
pub fn answer_seconds(difficulty: &str) -> Option<u32> {
    match difficulty.to_ascii_lowercase().as_str() {
        "easy" => Some(20),
        "medium" => Some(60),
        "hard" => Some(120),
        _ => None,
    }
}

fn time_guidance(difficulty: &str) -> &'static str {
    match difficulty.to_ascii_lowercase().as_str() {
        "easy" => "20 seconds - should be answerable with basic knowledge",
        "medium" => "60 seconds - requires explanation and examples",
        "hard" => "120 seconds - needs detailed analysis and design thinking",
        _ => "",
    }
}

pub fn mock_question(difficulty: &str) -> &'static str {
    match difficulty {
        "easy" => "What is React and how does it differ from vanilla JavaScript?",
        "medium" => "Explain the concept of state management in React applications.",
        "hard" => "Design a scalable architecture for a real-time chat application using React and Node.js.",
        _ => "Sample question",
    }
}

pub fn mock_ideal_answer(question: &str) -> String {
    format!(
        "This is an ideal answer for: {question}. It demonstrates understanding of the concept and provides practical examples."
    )
}

fn difficulty_plan(difficulties: &[String]) -> String {
    difficulties
        .iter()
        .enumerate()
        .map(|(i, d)| match answer_seconds(d) {
            Some(secs) => format!(
                "{}. {} question ({secs} seconds to answer)",
                i + 1,
                d.to_uppercase()
            ),
            None => format!("{}. {} question", i + 1, d.to_uppercase()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generates all six questions in one call. Accepts only a reply with exactly
/// `BATCH_SIZE` non-empty questions.
pub async fn generate_batch(
    model: Option<&dyn LanguageModel>,
    job_context: &str,
    job_description: &str,
    difficulties: &[String],
) -> Result<QuestionBatch, AppError> {
    let Some(model) = model else {
        return Err(AppError::Generation(BATCH_FAILED_MESSAGE.to_string()));
    };

    let prompt = fill(
        BATCH_QUESTIONS_PROMPT,
        &[
            ("difficulty_plan", &difficulty_plan(difficulties)),
            ("guidelines", DIFFICULTY_GUIDELINES),
            ("job_context", job_context),
            ("job_description", job_description),
        ],
    );

    let text = match model.complete(&prompt, BATCH_MAX_TOKENS).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Batch generation failed: {e}");
            return Err(AppError::Generation(BATCH_FAILED_MESSAGE.to_string()));
        }
    };

    match parse_json::<QuestionBatch>(&text) {
        Ok(batch) if is_complete_batch(&batch) => {
            info!(
                "Generated {} questions for {job_context}",
                batch.questions.len()
            );
            Ok(batch)
        }
        Ok(batch) => {
            warn!(
                "Batch reply had {} usable questions, expected {BATCH_SIZE}",
                batch.questions.len()
            );
            Err(AppError::Generation(BATCH_FAILED_MESSAGE.to_string()))
        }
        Err(e) => {
            warn!("Batch reply was not valid JSON: {e}");
            Err(AppError::Generation(BATCH_FAILED_MESSAGE.to_string()))
        }
    }
}

fn is_complete_batch(batch: &QuestionBatch) -> bool {
    batch.questions.len() == BATCH_SIZE
        && batch.questions.iter().all(|GeneratedQuestion { question, .. }| {
            !question.trim().is_empty()
        })
}

/// Generates one question. A JSON object reply is passed through; a prose reply
/// is taken as the question text itself.
pub async fn generate_question(
    model: Option<&dyn LanguageModel>,
    difficulty: &str,
    job_context: &str,
) -> Value {
    if let Some(model) = model {
        let prompt = fill(
            SINGLE_QUESTION_PROMPT,
            &[
                ("difficulty_upper", &difficulty.to_uppercase()),
                ("difficulty", difficulty),
                ("time_guidance", time_guidance(difficulty)),
                ("guidelines", DIFFICULTY_GUIDELINES),
                ("job_context", job_context),
            ],
        );

        match model.complete(&prompt, QUESTION_MAX_TOKENS).await {
            Ok(text) => {
                return match parse_json::<Value>(&text) {
                    Ok(value @ Value::Object(_)) => value,
                    _ => json!({ "question": text, "difficulty": difficulty }),
                };
            }
            Err(e) => warn!("Question generation failed, using mock: {e}"),
        }
    }

    json!({ "question": mock_question(difficulty), "difficulty": difficulty })
}

/// Generates an ideal answer for `question`, with the same pass-through rules
/// as [`generate_question`].
pub async fn generate_ideal(model: Option<&dyn LanguageModel>, question: &str) -> Value {
    if let Some(model) = model {
        let prompt = fill(IDEAL_ANSWER_PROMPT, &[("question", question)]);

        match model.complete(&prompt, DEFAULT_MAX_TOKENS).await {
            Ok(text) => {
                return match parse_json::<Value>(&text) {
                    Ok(value @ Value::Object(_)) => value,
                    _ => json!({ "ideal": text }),
                };
            }
            Err(e) => warn!("Ideal answer generation failed, using mock: {e}"),
        }
    }

    json!({ "ideal": mock_ideal_answer(question) })
}
