//! HTTP handlers for the resume extraction endpoints.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::metrics::ExtractionMetrics;
use super::ExtractError;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

/// Stored and returned for every parsed resume. The `id` is the handle
/// later stages (fit scoring, question generation, email drafting) use to
/// pick the record back up.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub id: Uuid,
    pub status: String,
    pub data: ResumeRecord,
    pub metrics: ExtractionMetrics,
    pub created_at: DateTime<Utc>,
}

/// POST /api/v1/resumes
/// Multipart upload with a single `file` field holding a PDF.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResponse>, AppError> {
    let mut pdf_bytes: Option<bytes::Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(AppError::Validation(
                "only PDF files are supported".to_string(),
            ));
        }
        pdf_bytes = Some(
            field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?,
        );
    }

    let pdf_bytes =
        pdf_bytes.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;

    // The pipeline works on paths; park the upload in a temp file that is
    // cleaned up when the handle drops.
    let temp = tempfile::NamedTempFile::new().map_err(|e| AppError::Internal(e.into()))?;
    std::fs::write(temp.path(), &pdf_bytes).map_err(|e| AppError::Internal(e.into()))?;

    let (record, metrics) = state
        .extractor
        .extract_document(temp.path())
        .await
        .map_err(|e| match e {
            ExtractError::DocumentUnreadable(msg) => AppError::UnreadableDocument(msg),
            other => AppError::Internal(other.into()),
        })?;

    let id = Uuid::new_v4();
    let response = ExtractionResponse {
        id,
        status: "success".to_string(),
        data: record,
        metrics,
        created_at: Utc::now(),
    };
    state.store.save_resume(id, &response)?;

    Ok(Json(response))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExtractionResponse>, AppError> {
    let response: ExtractionResponse = state.store.load_resume(id)?;
    Ok(Json(response))
}
