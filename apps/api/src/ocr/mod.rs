//! OCR fallback for pages whose text layer is too sparse to use.
//!
//! Two interchangeable engines sit behind the [`OcrEngine`] trait: a local
//! Tesseract pass over a rasterized page, and a vision transcription call
//! against the inference backend. `OcrFallback` applies the configured
//! primary engine first and the other as a backup; an unreadable page
//! degrades to an empty string, never to an error.

pub mod tesseract;
pub mod vision;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use async_trait::async_trait;
use tempfile::TempDir;
use thiserror::Error;
use tracing::warn;

use crate::llm_client::LlmClient;

pub use tesseract::TesseractOcr;
pub use vision::VisionOcr;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR engine unavailable: {0}")]
    Unavailable(String),

    #[error("OCR failed: {0}")]
    Failed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which engine to try first for scanned pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OcrStrategy {
    #[default]
    Tesseract,
    Vision,
    /// Skip OCR entirely; sparse pages are dropped.
    None,
}

impl FromStr for OcrStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tesseract" => Ok(Self::Tesseract),
            "vision" => Ok(Self::Vision),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown OCR strategy '{other}' (expected tesseract, vision, or none)"
            )),
        }
    }
}

/// A text-recovery engine for one rasterizable page.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Engine name used in logs.
    fn name(&self) -> &'static str;

    /// Recovers text from the given 1-based page of a PDF document.
    async fn recover_text(&self, pdf_path: &Path, page_number: u32) -> Result<String, OcrError>;
}

/// Ordered engine chain applied to a scanned page.
pub struct OcrFallback {
    engines: Vec<Box<dyn OcrEngine>>,
}

impl OcrFallback {
    /// Builds the engine chain for a strategy. The non-primary engine always
    /// serves as the backup so a missing local binary still leaves the vision
    /// path (and vice versa).
    pub fn from_strategy(strategy: OcrStrategy, llm: &LlmClient) -> Self {
        let engines: Vec<Box<dyn OcrEngine>> = match strategy {
            OcrStrategy::Tesseract => vec![
                Box::new(TesseractOcr::default()),
                Box::new(VisionOcr::new(llm.clone())),
            ],
            OcrStrategy::Vision => vec![
                Box::new(VisionOcr::new(llm.clone())),
                Box::new(TesseractOcr::default()),
            ],
            OcrStrategy::None => vec![],
        };
        Self { engines }
    }

    /// An adapter with no engines; every recovery attempt yields "".
    pub fn disabled() -> Self {
        Self { engines: vec![] }
    }

    #[cfg(test)]
    pub(crate) fn with_engines(engines: Vec<Box<dyn OcrEngine>>) -> Self {
        Self { engines }
    }

    /// Attempts each engine in order. Never fails: an empty string tells the
    /// segmenter the page stays unreadable and should be dropped.
    pub async fn recover_text(&self, pdf_path: &Path, page_number: u32) -> String {
        for engine in &self.engines {
            match engine.recover_text(pdf_path, page_number).await {
                Ok(text) if !text.trim().is_empty() => return text,
                Ok(_) => {
                    warn!(
                        page = page_number,
                        engine = engine.name(),
                        "OCR produced no text"
                    );
                }
                Err(e) => {
                    warn!(page = page_number, engine = engine.name(), error = %e, "OCR failed");
                }
            }
        }
        String::new()
    }
}

/// Rasterizes one page of a PDF to a grayscale PNG via `pdftoppm`.
///
/// 150 DPI keeps recognition quality acceptable while halving raster time
/// against the 300 DPI default. Returns the temp dir alongside the image
/// path; the image lives only as long as the dir handle.
pub(crate) async fn rasterize_page(
    pdf_path: &Path,
    page_number: u32,
) -> Result<(TempDir, PathBuf), OcrError> {
    let temp_dir = TempDir::new()?;
    let output_prefix = temp_dir.path().join("page");
    let page_str = page_number.to_string();

    let status = tokio::process::Command::new("pdftoppm")
        .args(["-png", "-r", "150", "-gray", "-f", &page_str, "-l", &page_str])
        .arg(pdf_path)
        .arg(&output_prefix)
        .status()
        .await;

    match status {
        Ok(s) if s.success() => {}
        Ok(_) => {
            return Err(OcrError::Failed(format!(
                "pdftoppm failed to convert page {page_number}"
            )))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(OcrError::Unavailable(
                "pdftoppm (install poppler-utils)".to_string(),
            ))
        }
        Err(e) => return Err(OcrError::Io(e)),
    }

    // pdftoppm pads the page number to the document's digit width
    // (page-01.png, page-001.png, ...).
    for digits in [1, 2, 3, 4] {
        let candidate = temp_dir
            .path()
            .join(format!("page-{page_number:0width$}.png", width = digits));
        if candidate.exists() {
            return Ok((temp_dir, candidate));
        }
    }

    Err(OcrError::Failed(format!(
        "no image generated for page {page_number}"
    )))
}
