use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::job::Job;

/// Shared in-memory job list, seeded with one posting.
#[derive(Clone)]
pub struct JobStore {
    jobs: Arc<RwLock<Vec<Job>>>,
}

impl Default for JobStore {
    fn default() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(vec![Job::seed()])),
        }
    }
}

impl JobStore {
    pub async fn list(&self) -> Vec<Job> {
        self.jobs.read().await.clone()
    }

    /// Stores a new job under the next free id.
    pub async fn create(
        &self,
        title: String,
        description: Option<String>,
        custom_questions: Vec<String>,
    ) -> Job {
        let mut jobs = self.jobs.write().await;
        let id = jobs.iter().map(|j| j.id).max().unwrap_or(0) + 1;
        let job = Job {
            id,
            title,
            description,
            custom_questions,
            created_at: Utc::now(),
        };
        jobs.push(job.clone());
        job
    }

    pub async fn exists(&self, id: i64) -> bool {
        self.jobs.read().await.iter().any(|j| j.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_store_has_seed_job() {
        let store = JobStore::default();
        let jobs = store.list().await;
        assert_eq!(jobs, vec![Job::seed()]);
        assert!(store.exists(1).await);
        assert!(!store.exists(2).await);
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = JobStore::default();
        let a = store.create("Backend".to_string(), None, vec![]).await;
        let b = store
            .create("SRE".to_string(), Some("On-call".to_string()), vec!["Why SRE?".to_string()])
            .await;
        assert_eq!(a.id, 2);
        assert_eq!(b.id, 3);
        assert_eq!(store.list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let store = JobStore::default();
        let clone = store.clone();
        clone.create("Data".to_string(), None, vec![]).await;
        assert_eq!(store.list().await.len(), 2);
    }
}
