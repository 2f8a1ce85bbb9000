use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_CLASSIFIER_URL: &str =
    "https://api-inference.huggingface.co/models/dandelin/vilt-b32-finetuned-vqa";
/// The classifier's top answer must score strictly above this to count as a document.
pub const DEFAULT_CLASSIFIER_THRESHOLD: f32 = 0.8;
/// OCR output shorter than this (trimmed, in characters) is treated as unreadable.
pub const DEFAULT_OCR_MIN_CHARS: usize = 20;
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";
pub const DEFAULT_TESSERACT_BIN: &str = "tesseract";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub groq_api_key: String,
    pub hf_api_key: String,
    pub bind_addr: String,
    pub port: u16,
    pub llm_base_url: String,
    pub llm_model: String,
    pub classifier_url: String,
    pub classifier_threshold: f32,
    pub classifier_fail_open: bool,
    pub ocr_min_chars: usize,
    pub ocr_language: String,
    pub tesseract_bin: String,
    pub max_upload_bytes: usize,
    pub upstream_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` delegates
    /// here; tests pass a map instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("{key}: environment variable not set"))
        };
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let llm_base_url = or_default("LLM_BASE_URL", DEFAULT_LLM_BASE_URL);
        Url::parse(&llm_base_url).map_err(|e| format!("LLM_BASE_URL: {e}"))?;

        let classifier_url = or_default("CLASSIFIER_URL", DEFAULT_CLASSIFIER_URL);
        Url::parse(&classifier_url).map_err(|e| format!("CLASSIFIER_URL: {e}"))?;

        let classifier_threshold: f32 =
            parse_or(&lookup, "CLASSIFIER_THRESHOLD", DEFAULT_CLASSIFIER_THRESHOLD)?;
        if !(0.0..=1.0).contains(&classifier_threshold) {
            return Err(format!(
                "CLASSIFIER_THRESHOLD: {classifier_threshold} is outside 0.0..=1.0"
            ));
        }

        Ok(Self {
            groq_api_key: required("GROQ_API_KEY")?,
            hf_api_key: required("HF_API_KEY")?,
            bind_addr: or_default("BIND_ADDR", DEFAULT_BIND_ADDR),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            llm_base_url: llm_base_url.trim_end_matches('/').to_string(),
            llm_model: or_default("LLM_MODEL", DEFAULT_LLM_MODEL),
            classifier_url,
            classifier_threshold,
            classifier_fail_open: parse_or(&lookup, "CLASSIFIER_FAIL_OPEN", true)?,
            ocr_min_chars: parse_or(&lookup, "OCR_MIN_CHARS", DEFAULT_OCR_MIN_CHARS)?,
            ocr_language: or_default("OCR_LANGUAGE", DEFAULT_OCR_LANGUAGE),
            tesseract_bin: or_default("TESSERACT_BIN", DEFAULT_TESSERACT_BIN),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            upstream_timeout: Duration::from_secs(parse_or(
                &lookup,
                "UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?),
        })
    }

    /// Address the HTTP server listens on.
    ///
    /// # Errors
    ///
    /// Returns an error if `BIND_ADDR` and `PORT` do not form a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .map_err(|e| format!("BIND_ADDR/PORT: {e}"))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse().map_err(|e| format!("{key}: {e}")),
        None => Ok(default),
    }
}
