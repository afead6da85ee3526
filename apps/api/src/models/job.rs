use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub custom_questions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a job. `title` is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewJob {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub custom_questions: Vec<String>,
}

impl Job {
    /// The posting every fresh store starts with.
    pub fn seed() -> Self {
        Job {
            id: 1,
            title: "Fullstack Developer".to_string(),
            description: Some("React/Node.js developer position".to_string()),
            custom_questions: vec![],
            created_at: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}
