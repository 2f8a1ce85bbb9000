use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{0}")]
    MissingInput(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("The uploaded image does not appear to be a medical report.")]
    NotAReport,

    #[error("Could not extract sufficient text from the image.")]
    InsufficientText { extracted_chars: usize, required: usize },

    #[error("Failed to access chat-completion API: {0}")]
    LlmError(String),

    #[error("Failed to access document classifier: {0}")]
    ClassifierError(String),

    #[error("Failed to run OCR: {0}")]
    OcrError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl ReportError {
    /// Whether the error was caused by what the caller sent rather than by
    /// an upstream or internal failure.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingInput(_) | Self::InvalidInput(_) | Self::NotAReport
        )
    }

    /// Message safe to show to the caller for errors that carry their own
    /// user-facing wording. `None` for failures that must stay generic.
    #[must_use]
    pub fn public_message(&self) -> Option<String> {
        match self {
            Self::MissingInput(_)
            | Self::InvalidInput(_)
            | Self::NotAReport
            | Self::InsufficientText { .. } => Some(self.to_string()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ReportError {
    fn from(error: reqwest::Error) -> Self {
        ReportError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for ReportError {
    fn from(error: anyhow::Error) -> Self {
        ReportError::LlmError(error.to_string())
    }
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::OcrError(error.to_string())
    }
}
