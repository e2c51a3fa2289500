use anyhow::{Context, Result};

use crate::ocr::OcrStrategy;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Root directory for JSON record storage.
    pub data_dir: String,
    /// Concurrent page extractions per document.
    pub max_workers: usize,
    /// Non-whitespace characters below which a page counts as scanned.
    pub min_chars_per_page: usize,
    /// Primary OCR engine for scanned pages.
    pub ocr_strategy: OcrStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            data_dir: env_or("DATA_DIR", "data"),
            max_workers: env_or("EXTRACTION_MAX_WORKERS", "5")
                .parse::<usize>()
                .context("EXTRACTION_MAX_WORKERS must be a positive integer")?,
            min_chars_per_page: env_or("EXTRACTION_MIN_CHARS_PER_PAGE", "100")
                .parse::<usize>()
                .context("EXTRACTION_MIN_CHARS_PER_PAGE must be an integer")?,
            ocr_strategy: env_or("OCR_STRATEGY", "tesseract")
                .parse::<OcrStrategy>()
                .map_err(anyhow::Error::msg)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
