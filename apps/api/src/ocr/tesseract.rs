//! Local raster OCR via the system `tesseract` binary.

use std::path::Path;

use async_trait::async_trait;

use super::{rasterize_page, OcrEngine, OcrError};

/// Tesseract-backed engine. Pages are rasterized first, then recognized
/// with `--psm 6` (assume a single uniform block of text), which suits the
/// dense column layout of resumes.
pub struct TesseractOcr {
    lang: String,
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
        }
    }
}

impl TesseractOcr {
    pub fn with_language(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    async fn recover_text(&self, pdf_path: &Path, page_number: u32) -> Result<String, OcrError> {
        let (_raster_dir, image_path) = rasterize_page(pdf_path, page_number).await?;

        let output = tokio::process::Command::new("tesseract")
            .arg(&image_path)
            .arg("stdout")
            .args(["-l", &self.lang, "--psm", "6"])
            .output()
            .await;

        match output {
            Ok(out) if out.status.success() => Ok(String::from_utf8_lossy(&out.stdout).to_string()),
            Ok(out) => Err(OcrError::Failed(format!(
                "tesseract exited with error: {}",
                String::from_utf8_lossy(&out.stderr)
            ))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(OcrError::Unavailable(
                "tesseract (install tesseract-ocr)".to_string(),
            )),
            Err(e) => Err(OcrError::Io(e)),
        }
    }
}
