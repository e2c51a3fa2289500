//! Page segmentation: split a PDF into per-page text units, recovering
//! scanned pages through OCR before giving up on them.

use std::path::Path;

use tracing::{debug, info};

use super::ExtractError;
use crate::ocr::OcrFallback;

/// One page's extracted text plus its zero-based physical page index.
/// Consumed exactly once by an extraction worker.
#[derive(Debug, Clone)]
pub struct PageText {
    pub index: usize,
    pub text: String,
}

/// Splits the document into pages with usable text.
///
/// Pages whose native text layer falls below `min_chars` non-whitespace
/// characters are treated as scanned and routed through the OCR adapter;
/// whichever source yields more content wins. Pages empty after both paths
/// are dropped, so the result may be shorter than the physical page count.
///
/// Only a document that cannot be opened at all is an error.
pub async fn segment(
    path: &Path,
    min_chars: usize,
    ocr: &OcrFallback,
) -> Result<Vec<PageText>, ExtractError> {
    let pages = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| ExtractError::DocumentUnreadable(e.to_string()))?;

    let mut out = Vec::with_capacity(pages.len());
    for (index, mut text) in pages.into_iter().enumerate() {
        if is_sparse(&text, min_chars) {
            debug!(page = index + 1, "sparse text layer, attempting OCR");
            let recovered = ocr.recover_text(path, (index + 1) as u32).await;
            if content_chars(&recovered) > content_chars(&text) {
                text = recovered;
            }
        }

        if text.trim().is_empty() {
            info!(page = index + 1, "page yielded no text, dropping");
            continue;
        }

        out.push(PageText { index, text });
    }

    Ok(out)
}

/// A page is "scanned" when its text layer carries fewer meaningful
/// characters than the configured threshold.
pub(crate) fn is_sparse(text: &str, min_chars: usize) -> bool {
    content_chars(text) < min_chars
}

fn content_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_page_is_sparse() {
        assert!(is_sparse("", 100));
        assert!(is_sparse("   \n\t  ", 100));
    }

    #[test]
    fn test_whitespace_does_not_count_toward_density() {
        // 5 content chars padded with whitespace
        assert!(is_sparse("a b c d e\n\n\n", 6));
        assert!(!is_sparse("a b c d e", 5));
    }

    #[test]
    fn test_dense_page_is_not_sparse() {
        let text = "Senior backend engineer with ten years of experience.".repeat(5);
        assert!(!is_sparse(&text, 100));
    }

    #[tokio::test]
    async fn test_unreadable_document_fails_fast() {
        let err = segment(
            Path::new("/nonexistent/resume.pdf"),
            100,
            &OcrFallback::disabled(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ExtractError::DocumentUnreadable(_)));
    }
}
