//! HTTP handlers for the generation endpoints: JD parsing, fit scoring,
//! interview questions, and email drafting.
//!
//! Parsed resumes and JDs are referenced by id; the handlers rehydrate them
//! from the record store rather than re-parsing on every call.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::handlers::ExtractionResponse;
use crate::generation::email::{draft_application_email, EmailDraft};
use crate::generation::fit_scoring::FitReport;
use crate::generation::jd_parser::parse_job_description;
use crate::generation::questions::{generate_questions, InterviewConfig, QuestionMetrics, QuestionSet};
use crate::generation::CallMetrics;
use crate::models::job::ParsedJobDescription;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseJdRequest {
    pub jd_text: String,
}

/// Stored and returned for every parsed job description.
#[derive(Debug, Serialize, Deserialize)]
pub struct JdResponse {
    pub id: Uuid,
    pub status: String,
    pub data: ParsedJobDescription,
    pub metrics: CallMetrics,
    pub created_at: DateTime<Utc>,
}

/// POST /api/v1/jobs
pub async fn handle_parse_jd(
    State(state): State<AppState>,
    Json(req): Json<ParseJdRequest>,
) -> Result<Json<JdResponse>, AppError> {
    if req.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text must not be empty".to_string()));
    }

    let (data, metrics) = parse_job_description(&req.jd_text, &state.llm).await?;

    let id = Uuid::new_v4();
    let response = JdResponse {
        id,
        status: "success".to_string(),
        data,
        metrics,
        created_at: Utc::now(),
    };
    state.store.save_job(id, &response)?;

    Ok(Json(response))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_jd(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JdResponse>, AppError> {
    let response: JdResponse = state.store.load_job(id)?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct FitRequest {
    pub resume_id: Uuid,
    pub job_id: Uuid,
}

/// POST /api/v1/fit
pub async fn handle_fit(
    State(state): State<AppState>,
    Json(req): Json<FitRequest>,
) -> Result<Json<FitReport>, AppError> {
    let (resume, jd) = load_pair(&state, req.resume_id, req.job_id)?;
    let report = state.fit_scorer.score(&resume, &jd).await?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub resume_id: Uuid,
    pub job_id: Uuid,
    #[serde(flatten)]
    pub config: InterviewConfig,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub resume_id: Uuid,
    pub job_id: Uuid,
    pub data: QuestionSet,
    pub metrics: QuestionMetrics,
}

/// POST /api/v1/interviews/questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(req): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    let (resume, jd) = load_pair(&state, req.resume_id, req.job_id)?;
    let (data, metrics) = generate_questions(&resume, &jd, &req.config, &state.llm).await?;

    Ok(Json(QuestionResponse {
        resume_id: req.resume_id,
        job_id: req.job_id,
        data,
        metrics,
    }))
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub resume_id: Uuid,
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub data: EmailDraft,
    pub metrics: CallMetrics,
}

/// POST /api/v1/emails/draft
pub async fn handle_draft_email(
    State(state): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> Result<Json<EmailResponse>, AppError> {
    let (resume, jd) = load_pair(&state, req.resume_id, req.job_id)?;
    let (data, metrics) = draft_application_email(&resume, &jd, &state.llm).await?;
    Ok(Json(EmailResponse { data, metrics }))
}

fn load_pair(
    state: &AppState,
    resume_id: Uuid,
    job_id: Uuid,
) -> Result<(ResumeRecord, ParsedJobDescription), AppError> {
    let resume: ExtractionResponse = state.store.load_resume(resume_id)?;
    let jd: JdResponse = state.store.load_job(job_id)?;
    Ok((resume.data, jd.data))
}
