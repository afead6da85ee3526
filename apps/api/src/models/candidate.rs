use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewData {
    pub answers: Vec<serde_json::Value>,
    pub scores: Vec<f64>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub job_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub final_score: f64,
    pub status: String,
    pub interview_data: InterviewData,
}

impl Candidate {
    /// Placeholder roster returned until candidate persistence exists.
    pub fn sample_for_job(job_id: i64) -> Vec<Candidate> {
        vec![Candidate {
            id: 1,
            job_id,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+1234567890".to_string(),
            final_score: 8.5,
            status: "completed".to_string(),
            interview_data: InterviewData {
                answers: vec![],
                scores: vec![],
                summary: "Strong candidate with good technical skills.".to_string(),
            },
        }]
    }
}
