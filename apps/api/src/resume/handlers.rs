//! Axum route handler for resume upload and parsing.

use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::documents::{extract_text_blocking, DocumentKind, MAX_UPLOAD_BYTES};
use crate::resume::extractor::{extract_identity, ExtractedIdentity};

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub success: bool,
    pub text: String,
    pub extracted_info: ExtractedIdentity,
}

/// POST /api/parse-resume
///
/// Multipart upload with a `file` field (PDF or DOCX, at most 10 MiB).
/// Returns the decoded text and the best-guess name, email, and phone.
pub async fn handle_parse_resume(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|_| AppError::Validation("No file provided".to_string()))?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(FILE_FIELD) {
            return parse_upload(field).await.map(Json);
        }
    }
    Err(AppError::Validation("No file provided".to_string()))
}

async fn parse_upload(mut field: Field<'_>) -> Result<ParseResumeResponse, AppError> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    if file_name.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    let kind = DocumentKind::from_file_name(&file_name).ok_or_else(|| {
        AppError::Validation("Only PDF and DOCX files are allowed".to_string())
    })?;

    let bytes = read_bounded(&mut field).await?;
    info!("Parsing resume upload '{file_name}' ({} bytes)", bytes.len());

    let text = extract_text_blocking(kind, bytes).await?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from file".to_string(),
        ));
    }

    let extracted_info = extract_identity(&text);
    info!(
        "Resume '{file_name}' parsed: name={}, email={}, phone={}",
        extracted_info.name.is_some(),
        extracted_info.email.is_some(),
        extracted_info.phone.is_some()
    );

    Ok(ParseResumeResponse {
        success: true,
        text,
        extracted_info,
    })
}

/// Buffers the field, refusing anything over the upload ceiling.
async fn read_bounded(field: &mut Field<'_>) -> Result<Vec<u8>, AppError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(too_large());
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn too_large() -> AppError {
    AppError::Validation("File size must be less than 10MB".to_string())
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large()
    } else {
        AppError::Validation(format!("Invalid upload: {}", e.body_text()))
    }
}
