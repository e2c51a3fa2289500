//! Extraction worker: one page of text in, one partial record out.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use super::metrics::UsageMeter;
use super::prompts::{RESUME_EXTRACT_PROMPT_TEMPLATE, RESUME_EXTRACT_SYSTEM};
use super::segmenter::PageText;
use super::ExtractError;
use crate::llm_client::LlmClient;
use crate::models::resume::ResumeRecord;

/// The unit of concurrent work. The dispatcher only sees this seam, which
/// keeps its scheduling behavior testable without a network.
#[async_trait]
pub trait PageExtract: Send + Sync {
    async fn extract_page(&self, page: &PageText) -> Result<ResumeRecord, ExtractError>;
}

/// Production extractor backed by the inference client. Each call records
/// its token usage in the shared meter.
pub struct LlmPageExtractor {
    llm: LlmClient,
    meter: Arc<UsageMeter>,
}

impl LlmPageExtractor {
    pub fn new(llm: LlmClient, meter: Arc<UsageMeter>) -> Self {
        Self { llm, meter }
    }
}

#[async_trait]
impl PageExtract for LlmPageExtractor {
    async fn extract_page(&self, page: &PageText) -> Result<ResumeRecord, ExtractError> {
        let prompt = RESUME_EXTRACT_PROMPT_TEMPLATE.replace("{page_text}", &page.text);

        match self
            .llm
            .call_structured::<ResumeRecord>(&prompt, RESUME_EXTRACT_SYSTEM)
            .await
        {
            Ok((record, usage)) => {
                self.meter.record_call(&usage);
                Ok(record)
            }
            Err(e) => {
                // A malformed or missing response only costs this page;
                // sibling workers keep running.
                self.meter.record_failure();
                warn!(page = page.index + 1, error = %e, "page extraction failed");
                Err(ExtractError::PageExtractionFailed {
                    page: page.index + 1,
                })
            }
        }
    }
}
