use std::sync::Arc;

use crate::ai::{ChatCompleter, LlmClient};
use crate::clients::{
    DocumentClassifier, HuggingFaceClassifier, OcrEngine, TesseractOcr, ValidationPolicy,
};
use crate::core::config::{
    AppConfig, DEFAULT_CLASSIFIER_THRESHOLD, DEFAULT_OCR_LANGUAGE, DEFAULT_OCR_MIN_CHARS,
};
use crate::errors::ReportError;

/// Tunables for the image path.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    pub policy: ValidationPolicy,
    pub ocr_language: String,
    pub ocr_min_chars: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::new(DEFAULT_CLASSIFIER_THRESHOLD, true),
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
            ocr_min_chars: DEFAULT_OCR_MIN_CHARS,
        }
    }
}

impl From<&AppConfig> for PipelineSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            policy: ValidationPolicy::new(config.classifier_threshold, config.classifier_fail_open),
            ocr_language: config.ocr_language.clone(),
            ocr_min_chars: config.ocr_min_chars,
        }
    }
}

/// Upstream collaborators shared by every request. Nothing in here is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    llm: Arc<dyn ChatCompleter>,
    classifier: Arc<dyn DocumentClassifier>,
    ocr: Arc<dyn OcrEngine>,
    settings: PipelineSettings,
}

impl AppState {
    #[must_use]
    pub fn new(
        llm: Arc<dyn ChatCompleter>,
        classifier: Arc<dyn DocumentClassifier>,
        ocr: Arc<dyn OcrEngine>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            llm,
            classifier,
            ocr,
            settings,
        }
    }

    /// Wires the production clients from the startup config.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ReportError> {
        let llm = LlmClient::new(
            config.groq_api_key.clone(),
            config.llm_base_url.clone(),
            config.llm_model.clone(),
            config.upstream_timeout,
        )?;
        let classifier = HuggingFaceClassifier::new(
            config.hf_api_key.clone(),
            config.classifier_url.clone(),
            config.upstream_timeout,
        )?;
        let ocr = TesseractOcr::new(config.tesseract_bin.clone());

        Ok(Self::new(
            Arc::new(llm),
            Arc::new(classifier),
            Arc::new(ocr),
            PipelineSettings::from(config),
        ))
    }

    pub fn llm(&self) -> &dyn ChatCompleter {
        self.llm.as_ref()
    }

    pub fn classifier(&self) -> &dyn DocumentClassifier {
        self.classifier.as_ref()
    }

    pub fn ocr(&self) -> &dyn OcrEngine {
        self.ocr.as_ref()
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }
}
