//! Document classifier client module
//!
//! Asks a hosted visual-question-answering model whether an image shows a
//! text document, and decides what to do with its answer.

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

use crate::core::models::VqaAnswer;
use crate::errors::ReportError;

pub const DOCUMENT_QUESTION: &str = "Is this an image of a text document?";

#[async_trait]
pub trait DocumentClassifier: Send + Sync {
    /// Returns the model's candidate answers, best first.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::ClassifierError` or `ReportError::HttpError` when
    /// the call fails or the response cannot be read.
    async fn classify(&self, image: &[u8], question: &str) -> Result<Vec<VqaAnswer>, ReportError>;
}

/// Hugging Face inference API client for VQA models.
pub struct HuggingFaceClassifier {
    http: Client,
    api_key: String,
    url: String,
}

impl HuggingFaceClassifier {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, url: String, timeout: Duration) -> Result<Self, ReportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::ConfigError(format!("classifier HTTP client: {e}")))?;

        Ok(Self { http, api_key, url })
    }
}

#[async_trait]
impl DocumentClassifier for HuggingFaceClassifier {
    #[tracing::instrument(level = "info", skip(self, image), fields(image_bytes = image.len()))]
    async fn classify(&self, image: &[u8], question: &str) -> Result<Vec<VqaAnswer>, ReportError> {
        let body = json!({
            "inputs": {
                "question": question,
                "image": STANDARD.encode(image),
            }
        });

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ReportError::ClassifierError(format!(
                "status {status}: {error_text}"
            )));
        }

        response
            .json::<Vec<VqaAnswer>>()
            .await
            .map_err(|e| ReportError::ClassifierError(format!("unexpected response: {e}")))
    }
}

/// How classifier results gate the OCR step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationPolicy {
    pub confidence_threshold: f32,
    /// Treat a failed classifier call as a pass instead of an error.
    pub fail_open: bool,
}

impl ValidationPolicy {
    #[must_use]
    pub const fn new(confidence_threshold: f32, fail_open: bool) -> Self {
        Self {
            confidence_threshold,
            fail_open,
        }
    }

    /// Whether an answer list says "this is a document" confidently enough.
    #[must_use]
    pub fn accepts(&self, answers: &[VqaAnswer]) -> bool {
        answers.first().is_some_and(|top| {
            top.answer.trim().eq_ignore_ascii_case("yes") && top.score > self.confidence_threshold
        })
    }

    /// Turns a classifier outcome into a go/no-go for OCR.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NotAReport` when the image is rejected, or the
    /// classifier's own error when it failed and the policy is fail-closed.
    pub fn evaluate(
        &self,
        outcome: Result<Vec<VqaAnswer>, ReportError>,
    ) -> Result<(), ReportError> {
        match outcome {
            Ok(answers) => {
                if self.accepts(&answers) {
                    info!(top = ?answers.first(), "Image accepted as a document");
                    Ok(())
                } else {
                    info!(top = ?answers.first(), "Image rejected as not a document");
                    Err(ReportError::NotAReport)
                }
            }
            Err(e) if self.fail_open => {
                warn!("Image validation API failed, continuing with OCR: {}", e);
                Ok(())
            }
            Err(e) => {
                warn!("Image validation API failed: {}", e);
                Err(e)
            }
        }
    }
}
