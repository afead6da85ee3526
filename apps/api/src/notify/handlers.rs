//! Axum route handler for candidate result emails.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::errors::AppError;
use crate::notify::mailer::MailError;
use crate::notify::templates::EmailTemplate;
use crate::state::AppState;

fn field(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct SendEmailRequest {
    pub to: Option<String>,
    pub template: Option<String>,
    pub candidate_name: Option<String>,
    pub job_title: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SendEmailResponse {
    pub status: String,
    pub message: String,
}

/// POST /api/send-email
///
/// Delivery failures are not request failures: the hiring decision is already
/// recorded client-side, so a failed send returns `status: "warning"`.
pub async fn handle_send_email(
    State(state): State<AppState>,
    Json(request): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, AppError> {
    let (Some(to), Some(template), Some(candidate_name), Some(job_title)) = (
        field(&request.to),
        field(&request.template),
        field(&request.candidate_name),
        field(&request.job_title),
    ) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let template: EmailTemplate = template.parse().map_err(|_| {
        AppError::Validation(r#"Invalid template. Must be "shortlist" or "reject""#.to_string())
    })?;

    let email = template.render(candidate_name, job_title);

    let response = match state.mailer.send(to, &email.subject, &email.html).await {
        Ok(()) => SendEmailResponse {
            status: "success".to_string(),
            message: format!("Email sent successfully to {to}"),
        },
        Err(e) => {
            match e {
                MailError::NotConfigured => {
                    warn!("Email delivery not configured, skipping email to {to}")
                }
                other => error!("Failed to send email to {to}: {other}"),
            }
            SendEmailResponse {
                status: "warning".to_string(),
                message: "Email sending failed, but action was recorded".to_string(),
            }
        }
    };

    Ok(Json(response))
}
