//! Application email drafting from a parsed resume and job description.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::{EMAIL_DRAFT_PROMPT_TEMPLATE, EMAIL_DRAFT_SYSTEM};
use crate::generation::CallMetrics;
use crate::llm_client::LlmClient;
use crate::models::job::ParsedJobDescription;
use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

/// Drafts a job-application email. Wording and framing live entirely in the
/// prompt; this function only wires data through.
pub async fn draft_application_email(
    resume: &ResumeRecord,
    jd: &ParsedJobDescription,
    llm: &LlmClient,
) -> Result<(EmailDraft, CallMetrics), AppError> {
    let resume_json = serde_json::to_string(resume)
        .map_err(|e| AppError::Internal(e.into()))?;
    let jd_json = serde_json::to_string(jd).map_err(|e| AppError::Internal(e.into()))?;

    let prompt = EMAIL_DRAFT_PROMPT_TEMPLATE
        .replace("{resume_data}", &resume_json)
        .replace("{job_data}", &jd_json);

    let (draft, usage) = llm
        .call_structured::<EmailDraft>(&prompt, EMAIL_DRAFT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("email drafting failed: {e}")))?;

    Ok((draft, CallMetrics::from_usage(&usage)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_draft_deserializes() {
        let draft: EmailDraft = serde_json::from_str(
            r#"{"subject": "Application for Backend Engineer - Ada Lovelace",
                "body": "Dear Hiring Manager,\n\n..."}"#,
        )
        .unwrap();
        assert!(draft.subject.contains("Ada Lovelace"));
        assert!(draft.body.starts_with("Dear"));
    }

    #[test]
    fn test_prompt_template_embeds_both_documents() {
        let prompt = EMAIL_DRAFT_PROMPT_TEMPLATE
            .replace("{resume_data}", "RESUME_JSON")
            .replace("{job_data}", "JOB_JSON");
        assert!(prompt.contains("RESUME_JSON"));
        assert!(prompt.contains("JOB_JSON"));
    }
}
