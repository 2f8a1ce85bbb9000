//! Optical character recognition
//!
//! Runs the Tesseract CLI as a child process, feeding the image on stdin and
//! reading plain text from stdout.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::ReportError;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Extracts plain text from an encoded image.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::OcrError` if recognition fails.
    async fn recognize(&self, image: &[u8], language: &str) -> Result<String, ReportError>;
}

pub struct TesseractOcr {
    binary: String,
}

impl TesseractOcr {
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    #[tracing::instrument(level = "info", skip(self, image), fields(image_bytes = image.len()))]
    async fn recognize(&self, image: &[u8], language: &str) -> Result<String, ReportError> {
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", language])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ReportError::OcrError(format!("failed to start {}: {e}", self.binary)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ReportError::OcrError("child stdin unavailable".to_string()))?;
        let input = image.to_vec();
        let writer = tokio::spawn(async move {
            stdin.write_all(&input).await?;
            stdin.shutdown().await
        });

        let output = child.wait_with_output().await?;
        let written = writer
            .await
            .map_err(|e| ReportError::OcrError(format!("stdin writer panicked: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReportError::OcrError(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        written?;

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(chars = text.chars().count(), "OCR finished");
        info!("Extracted text from image");

        Ok(text)
    }
}

/// Counts meaningful characters in OCR output.
#[must_use]
pub fn meaningful_chars(text: &str) -> usize {
    text.trim().chars().count()
}
