pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::jobs::handlers as jobs;
use crate::notify::handlers as notify;
use crate::resume::documents::MAX_UPLOAD_BYTES;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Headroom for multipart framing on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        // Interview
        .route("/api/generate", post(interview::handle_generate))
        .route("/api/score", post(interview::handle_score))
        .route(
            "/api/evaluate-answers",
            post(interview::handle_evaluate_answers),
        )
        .route("/api/summary", post(interview::handle_summary))
        // Notifications
        .route("/api/send-email", post(notify::handle_send_email))
        // Jobs and candidates
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/candidates/:job_id",
            get(jobs::handle_list_candidates),
        )
        // Resume intake
        .route("/api/parse-resume", post(resume::handle_parse_resume))
        .layer(DefaultBodyLimit::max(
            MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::jobs::store::JobStore;
    use crate::llm_client::testing::CannedModel;
    use crate::notify::mailer::testing::RecordingMailer;
    use crate::notify::mailer::{DisabledMailer, Mailer};

    const BOUNDARY: &str = "X-TEST-BOUNDARY";

    fn offline_state(mailer: Arc<dyn Mailer>) -> AppState {
        AppState {
            llm: None,
            mailer,
            jobs: JobStore::default(),
            config: Config::offline(),
        }
    }

    fn app() -> Router {
        build_router(offline_state(Arc::new(DisabledMailer)))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn upload(file_name: &str, content: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/parse-resume")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let xml = format!("<w:document><w:body>{body}</w:body></w:document>");

        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file("word/document.xml", zip::write::FileOptions::default())
                .unwrap();
            writer.write_all(xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_generate_question_offline_uses_mock() {
        let request = post_json(
            "/api/generate",
            json!({"action": "generate_question", "difficulty": "easy", "job_context": "Fullstack React/Node"}),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["difficulty"], "easy");
        assert!(body["question"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_generate_with_model_passes_reply_through() {
        let mut state = offline_state(Arc::new(DisabledMailer));
        state.llm = Some(Arc::new(CannedModel::reply(
            r#"{"ideal": "Borrowing lends access without moving ownership."}"#,
        )));
        let request = post_json(
            "/api/generate",
            json!({"action": "generate_ideal", "question": "What is borrowing?"}),
        );
        let (status, body) = send(build_router(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ideal"], "Borrowing lends access without moving ownership.");
    }

    #[tokio::test]
    async fn test_generate_rejects_unknown_action() {
        let (status, body) = send(app(), post_json("/api/generate", json!({"action": "dance"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid action");
    }

    #[tokio::test]
    async fn test_generate_batch_offline_asks_for_individual_calls() {
        let request = post_json("/api/generate", json!({"action": "generate_batch", "job_context": "SRE"}));
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"]["message"],
            "Batch generation failed, use individual calls"
        );
    }

    #[tokio::test]
    async fn test_score_offline_is_in_range() {
        let request = post_json(
            "/api/score",
            json!({
                "question": "What is React?",
                "ideal": "React is a JavaScript library for building user interfaces.",
                "candidate_answer": "React is a framework for building web applications."
            }),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let score = body["score"].as_u64().unwrap();
        assert!((1..=10).contains(&score));
        assert!(body["reason"].is_string());
    }

    #[tokio::test]
    async fn test_score_requires_all_fields() {
        let request = post_json("/api/score", json!({"question": "What is React?", "ideal": "A library"}));
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Missing required fields");
    }

    #[tokio::test]
    async fn test_evaluate_answers_offline_heuristic() {
        let request = post_json(
            "/api/evaluate-answers",
            json!({"questions": [
                {"question": "Q1", "ideal_answer": "I1", "candidate_answer": "", "difficulty": "easy"},
                {"question": "Q2", "ideal_answer": "I2", "candidate_answer": "Components render state into a virtual DOM tree."}
            ]}),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["evaluations"][0]["score"], 0);
        assert_eq!(body["evaluations"][1]["score"], 5);
    }

    #[tokio::test]
    async fn test_evaluate_answers_requires_questions() {
        let (status, _) = send(app(), post_json("/api/evaluate-answers", json!({"questions": []}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summary_offline() {
        let request = post_json(
            "/api/summary",
            json!({
                "answers": [
                    {"question": "What is React?", "candidate_answer": "A library", "score": 8},
                    {"question": "What is Node.js?", "candidate_answer": "A runtime", "score": 7}
                ],
                "candidate": {"name": "John Doe", "email": "john@example.com"},
                "job": {"title": "Fullstack Developer"}
            }),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["final_score"], 7.5);
        assert!(body["summary"].as_str().unwrap().contains("John Doe"));
    }

    #[tokio::test]
    async fn test_send_email_success() {
        let mailer = Arc::new(RecordingMailer::default());
        let app = build_router(offline_state(mailer.clone()));
        let request = post_json(
            "/api/send-email",
            json!({
                "to": "test@example.com",
                "template": "shortlist",
                "candidate_name": "John Doe",
                "job_title": "Fullstack Developer"
            }),
        );
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Email sent successfully to test@example.com");

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "test@example.com");
    }

    #[tokio::test]
    async fn test_send_email_without_delivery_is_a_warning() {
        let request = post_json(
            "/api/send-email",
            json!({"to": "a@b.io", "template": "reject", "candidate_name": "Jo", "job_title": "SRE"}),
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "warning");
    }

    #[tokio::test]
    async fn test_send_email_rejects_unknown_template() {
        let request = post_json(
            "/api/send-email",
            json!({"to": "a@b.io", "template": "offer", "candidate_name": "Jo", "job_title": "SRE"}),
        );
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_then_list_jobs() {
        let app = app();
        let request = post_json(
            "/api/jobs",
            json!({
                "title": "Test Developer",
                "description": "A test position",
                "custom_questions": ["What is your experience with React?"]
            }),
        );
        let (status, body) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Test Developer");
        assert_eq!(body["id"], 2);

        let (status, body) = send(app, get("/api/jobs")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_job_requires_title() {
        let (status, body) = send(app(), post_json("/api/jobs", json!({"description": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Job title is required");
    }

    #[tokio::test]
    async fn test_candidates_for_known_and_unknown_job() {
        let (status, body) = send(app(), get("/api/candidates/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["candidates"][0]["name"], "John Doe");

        let (_, body) = send(app(), get("/api/candidates/99")).await;
        assert!(body["candidates"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_parse_resume_without_multipart_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/parse-resume")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No file provided");
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_other_file_types() {
        let (status, body) = send(app(), upload("test.txt", b"fake content")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Only PDF and DOCX files are allowed");
    }

    #[tokio::test]
    async fn test_parse_resume_requires_a_file_name() {
        let (status, body) = send(app(), upload("", b"%PDF-1.4")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No file selected");
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_file_over_upload_ceiling() {
        let oversized = vec![b'a'; MAX_UPLOAD_BYTES + 1];
        let (status, body) = send(app(), upload("resume.pdf", &oversized)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "File size must be less than 10MB");
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_body_over_request_limit() {
        let oversized = vec![b'a'; MAX_UPLOAD_BYTES + 2 * MULTIPART_OVERHEAD_BYTES];
        let (status, body) = send(app(), upload("resume.docx", &oversized)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "File size must be less than 10MB");
    }

    #[tokio::test]
    async fn test_parse_resume_docx_extracts_identity() {
        let docx = docx_with_paragraphs(&[
            "Jane Doe",
            "jane.doe@example.com",
            "(555) 123-4567",
            "Senior Engineer at Acme, 2019-2024",
        ]);
        let (status, body) = send(app(), upload("Jane_Doe.DOCX", &docx)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["text"].as_str().unwrap().starts_with("Jane Doe\n"));
        assert_eq!(
            body["extracted_info"],
            json!({"name": "Jane Doe", "email": "jane.doe@example.com", "phone": "(555) 123-4567"})
        );
    }

    #[tokio::test]
    async fn test_parse_resume_empty_docx_text() {
        let docx = docx_with_paragraphs(&[]);
        let (status, body) = send(app(), upload("blank.docx", &docx)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Could not extract text from file");
    }

    #[tokio::test]
    async fn test_parse_resume_corrupt_docx() {
        let (status, body) = send(app(), upload("broken.docx", b"not a zip")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Failed to parse resume file");
    }
}
