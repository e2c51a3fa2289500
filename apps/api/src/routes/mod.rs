pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as resume_handlers;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;

/// Uploaded resumes are small, but scanned multi-page PDFs are not.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes", post(resume_handlers::handle_parse_resume))
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get_resume),
        )
        // Job description API
        .route("/api/v1/jobs", post(generation_handlers::handle_parse_jd))
        .route("/api/v1/jobs/:id", get(generation_handlers::handle_get_jd))
        // Matching and generation API
        .route("/api/v1/fit", post(generation_handlers::handle_fit))
        .route(
            "/api/v1/interviews/questions",
            post(generation_handlers::handle_generate_questions),
        )
        .route(
            "/api/v1/emails/draft",
            post(generation_handlers::handle_draft_email),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
