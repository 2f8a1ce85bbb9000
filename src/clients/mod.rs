//! Client modules for external API interactions

pub mod classifier;
pub mod ocr;

pub use classifier::{DOCUMENT_QUESTION, DocumentClassifier, HuggingFaceClassifier, ValidationPolicy};
pub use ocr::{OcrEngine, TesseractOcr};
