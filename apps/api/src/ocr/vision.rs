//! Vision-model OCR: rasterize the page and ask the inference backend for a
//! transcription.

use std::path::Path;

use async_trait::async_trait;

use super::{rasterize_page, OcrEngine, OcrError};
use crate::llm_client::LlmClient;

pub struct VisionOcr {
    llm: LlmClient,
}

impl VisionOcr {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl OcrEngine for VisionOcr {
    fn name(&self) -> &'static str {
        "vision"
    }

    async fn recover_text(&self, pdf_path: &Path, page_number: u32) -> Result<String, OcrError> {
        let (_raster_dir, image_path) = rasterize_page(pdf_path, page_number).await?;
        let png = tokio::fs::read(&image_path).await?;

        // Transcription token usage is not folded into extraction metrics;
        // the cost table covers extraction calls only.
        let (text, _usage) = self
            .llm
            .transcribe_page(&png)
            .await
            .map_err(|e| OcrError::Failed(format!("vision transcription: {e}")))?;

        Ok(text)
    }
}
