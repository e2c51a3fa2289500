//! Document extraction pipeline.
//!
//! A document flows segment → dispatch → merge → repair:
//! the segmenter yields one text unit per readable page (recovering scanned
//! pages through OCR), the dispatcher extracts every page concurrently under
//! a bounded pool, the merge engine reconciles the partial records, and the
//! repair pass guarantees a schema-conformant result. Only an unreadable
//! document aborts the run; every other failure degrades to empty content.

pub mod dispatcher;
pub mod handlers;
pub mod merge;
pub mod metrics;
pub mod prompts;
pub mod segmenter;
pub mod validate;
pub mod worker;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::info;

use crate::llm_client::LlmClient;
use crate::models::resume::ResumeRecord;
use crate::ocr::{OcrFallback, OcrStrategy};
use self::metrics::{ExtractionMetrics, UsageMeter};
use self::worker::{LlmPageExtractor, PageExtract};

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document cannot be opened or segmented at all. Fatal.
    #[error("document unreadable: {0}")]
    DocumentUnreadable(String),

    /// One page's extraction call produced no usable record. Local to that
    /// page; the dispatcher substitutes an empty record.
    #[error("extraction failed for page {page}")]
    PageExtractionFailed { page: usize },
}

/// The extraction pipeline's public face. Cheap to clone; holds no state
/// between documents.
#[derive(Clone)]
pub struct ResumeExtractor {
    llm: LlmClient,
    max_workers: usize,
    min_chars_per_page: usize,
    ocr_strategy: OcrStrategy,
}

impl ResumeExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            max_workers: 5,
            min_chars_per_page: 100,
            ocr_strategy: OcrStrategy::default(),
        }
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    pub fn with_min_chars_per_page(mut self, min_chars: usize) -> Self {
        self.min_chars_per_page = min_chars;
        self
    }

    pub fn with_ocr_strategy(mut self, strategy: OcrStrategy) -> Self {
        self.ocr_strategy = strategy;
        self
    }

    /// Extracts a structured record from a PDF resume.
    ///
    /// Deterministic for identical inputs and identical backend outputs.
    /// Always returns a schema-conformant record; degraded pages surface
    /// only through empty fields and the metrics' failure count.
    pub async fn extract_document(
        &self,
        path: &Path,
    ) -> Result<(ResumeRecord, ExtractionMetrics), ExtractError> {
        let started = Instant::now();
        let meter = Arc::new(UsageMeter::default());

        let ocr = OcrFallback::from_strategy(self.ocr_strategy, &self.llm);
        let pages = segmenter::segment(path, self.min_chars_per_page, &ocr).await?;
        let total_pages = pages.len();
        info!(pages = total_pages, "document segmented");

        let extractor: Arc<dyn PageExtract> =
            Arc::new(LlmPageExtractor::new(self.llm.clone(), Arc::clone(&meter)));
        let workers = self.max_workers.min(total_pages.max(1));
        let partials = dispatcher::run(&extractor, pages, self.max_workers).await;

        let merged = merge::merge(&partials);
        let record = validate::validate_and_repair(merged);

        let metrics =
            ExtractionMetrics::finalize(total_pages, workers, started.elapsed(), meter.snapshot());
        info!(
            pages = metrics.total_pages,
            api_calls = metrics.api_calls,
            failed = metrics.failed_pages,
            cost = metrics.cost_estimate,
            "extraction complete"
        );

        Ok((record, metrics))
    }
}
