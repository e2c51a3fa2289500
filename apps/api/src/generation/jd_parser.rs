//! JD Parser: extracts structured hiring requirements from a raw job
//! description in a single schema-constrained call.

use crate::errors::AppError;
use crate::generation::prompts::{JD_PARSE_PROMPT_TEMPLATE, JD_PARSE_SYSTEM};
use crate::generation::CallMetrics;
use crate::llm_client::LlmClient;
use crate::models::job::ParsedJobDescription;

/// Parses a job description and returns the structured result with token
/// accounting for the call.
pub async fn parse_job_description(
    jd_text: &str,
    llm: &LlmClient,
) -> Result<(ParsedJobDescription, CallMetrics), AppError> {
    let prompt = JD_PARSE_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);
    let (parsed, usage) = llm
        .call_structured::<ParsedJobDescription>(&prompt, JD_PARSE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("JD parsing failed: {e}")))?;

    Ok((parsed, CallMetrics::from_usage(&usage)))
}
