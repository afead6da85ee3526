//! Final interview summary.

use serde_json::Value;
use tracing::warn;

use crate::interview::models::{ScoredAnswer, SummaryResponse};
use crate::interview::prompts::SUMMARY_PROMPT;
use crate::llm_client::prompts::fill;
use crate::llm_client::{parse_json, LanguageModel};

const SUMMARY_MAX_TOKENS: u32 = 300;

/// Mean of the answer scores; a missing score counts as zero.
pub fn average_score(answers: &[ScoredAnswer]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    let total: f64 = answers.iter().map(|a| a.score.unwrap_or(0.0)).sum();
    total / answers.len() as f64
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub async fn summarize(
    model: Option<&dyn LanguageModel>,
    answers: &[ScoredAnswer],
    candidate_name: &str,
    job_title: &str,
) -> SummaryResponse {
    let final_score = average_score(answers);
    let score_text = format!("{final_score:.1}");

    if let Some(model) = model {
        let answers_text = answers
            .iter()
            .enumerate()
            .map(|(i, a)| {
                format!(
                    "Q{}: {}\nAnswer: {}\nScore: {}/10\n",
                    i + 1,
                    a.question,
                    a.candidate_answer,
                    a.score.unwrap_or(0.0)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = fill(
            SUMMARY_PROMPT,
            &[
                ("candidate_name", candidate_name),
                ("job_title", job_title),
                ("final_score", &score_text),
                ("answers_text", &answers_text),
            ],
        );

        match model.complete(&prompt, SUMMARY_MAX_TOKENS).await {
            Ok(text) => match parse_json::<Value>(&text) {
                Ok(reply) => {
                    return SummaryResponse {
                        final_score: reply
                            .get("final_score")
                            .and_then(Value::as_f64)
                            .unwrap_or(final_score),
                        summary: reply
                            .get("summary")
                            .and_then(Value::as_str)
                            .map(String::from)
                            .unwrap_or_else(|| {
                                format!(
                                    "Candidate {candidate_name} demonstrated solid technical knowledge with an average score of {score_text}/10."
                                )
                            }),
                    };
                }
                Err(e) => warn!("Unusable summary reply, using mock: {e}"),
            },
            Err(e) => warn!("Summary generation failed, using mock: {e}"),
        }
    }

    SummaryResponse {
        final_score: round_one_decimal(final_score),
        summary: format!(
            "Candidate {candidate_name} demonstrated solid technical knowledge with an average score of {score_text}/10. \
             The candidate showed good understanding of core concepts and provided thoughtful responses throughout the interview."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::CannedModel;

    fn scored(score: Option<f64>) -> ScoredAnswer {
        ScoredAnswer {
            question: "What is Rust?".to_string(),
            candidate_answer: "A language".to_string(),
            score,
        }
    }

    #[test]
    fn test_average_counts_missing_scores_as_zero() {
        let answers = vec![scored(Some(8.0)), scored(Some(7.0)), scored(None)];
        assert!((average_score(&answers) - 5.0).abs() < f64::EPSILON);
        assert_eq!(average_score(&[]), 0.0);
    }

    #[tokio::test]
    async fn test_fallback_rounds_and_names_candidate() {
        let answers = vec![scored(Some(8.0)), scored(Some(7.0)), scored(Some(7.0))];
        let response = summarize(None, &answers, "John Doe", "Fullstack Developer").await;
        assert!((response.final_score - 7.3).abs() < 1e-9);
        assert!(response
            .summary
            .starts_with("Candidate John Doe demonstrated solid technical knowledge with an average score of 7.3/10."));
    }

    #[tokio::test]
    async fn test_model_reply_is_used() {
        let model = CannedModel::reply(r#"{"final_score": 7.5, "summary": "Strong on fundamentals."}"#);
        let answers = vec![scored(Some(8.0)), scored(Some(7.0))];
        let response = summarize(Some(&model), &answers, "Jane", "SRE").await;
        assert_eq!(response.final_score, 7.5);
        assert_eq!(response.summary, "Strong on fundamentals.");

        let prompts = model.prompts.lock().unwrap();
        assert!(prompts[0].contains("Average Score: 7.5/10"));
        assert!(prompts[0].contains("Q2: What is Rust?"));
    }

    #[tokio::test]
    async fn test_model_reply_missing_fields_uses_computed_values() {
        let model = CannedModel::reply("{}");
        let answers = vec![scored(Some(6.0))];
        let response = summarize(Some(&model), &answers, "Jane", "SRE").await;
        assert_eq!(response.final_score, 6.0);
        assert!(response.summary.contains("average score of 6.0/10"));
    }
}
