#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode};
use medbrief::ai::ChatCompleter;
use medbrief::api::{AppState, router};
use medbrief::clients::{DocumentClassifier, OcrEngine, ValidationPolicy};
use medbrief::core::models::VqaAnswer;
use medbrief::core::state::PipelineSettings;
use medbrief::errors::ReportError;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content};
use serde_json::Value;
use tower::ServiceExt;

pub const BOUNDARY: &str = "medbrief-test-boundary";
pub const OCR_TEXT: &str = "GLUCOSE: 95 mg/dL (70-99)\nHDL: 55 mg/dL (>40)";

/// Records every prompt it receives and replies with a canned answer.
pub struct MockLlm {
    reply: Option<String>,
    fail: bool,
    pub calls: Mutex<Vec<(Vec<ChatCompletionMessage>, f32)>>,
}

impl MockLlm {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Text of every message in the n-th call.
    pub fn texts(&self, call: usize) -> Vec<String> {
        self.calls.lock().unwrap()[call]
            .0
            .iter()
            .map(|m| match &m.content {
                Content::Text(t) => t.clone(),
                Content::ImageUrl(_) => String::new(),
            })
            .collect()
    }

    pub fn temperature(&self, call: usize) -> f32 {
        self.calls.lock().unwrap()[call].1
    }
}

#[async_trait]
impl ChatCompleter for MockLlm {
    async fn complete(
        &self,
        messages: Vec<ChatCompletionMessage>,
        temperature: f32,
    ) -> Result<Option<String>, ReportError> {
        self.calls.lock().unwrap().push((messages, temperature));
        if self.fail {
            return Err(ReportError::LlmError(
                "upstream 401: invalid api key gsk_secret".to_string(),
            ));
        }
        Ok(self.reply.clone())
    }
}

pub enum ClassifierBehavior {
    Answer(&'static str, f32),
    Empty,
    Fail,
}

pub struct MockClassifier {
    behavior: ClassifierBehavior,
    pub calls: Mutex<Vec<(usize, String)>>,
}

impl MockClassifier {
    pub fn new(behavior: ClassifierBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn accepting() -> Arc<Self> {
        Self::new(ClassifierBehavior::Answer("yes", 0.97))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentClassifier for MockClassifier {
    async fn classify(&self, image: &[u8], question: &str) -> Result<Vec<VqaAnswer>, ReportError> {
        self.calls
            .lock()
            .unwrap()
            .push((image.len(), question.to_string()));
        match self.behavior {
            ClassifierBehavior::Answer(answer, score) => Ok(vec![VqaAnswer {
                answer: answer.to_string(),
                score,
            }]),
            ClassifierBehavior::Empty => Ok(Vec::new()),
            ClassifierBehavior::Fail => Err(ReportError::ClassifierError(
                "connection refused".to_string(),
            )),
        }
    }
}

pub struct MockOcr {
    text: Result<String, String>,
    pub calls: Mutex<Vec<String>>,
}

impl MockOcr {
    pub fn returning(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            text: Err("tesseract crashed".to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl OcrEngine for MockOcr {
    async fn recognize(&self, _image: &[u8], language: &str) -> Result<String, ReportError> {
        self.calls.lock().unwrap().push(language.to_string());
        self.text.clone().map_err(ReportError::OcrError)
    }
}

pub struct Harness {
    pub llm: Arc<MockLlm>,
    pub classifier: Arc<MockClassifier>,
    pub ocr: Arc<MockOcr>,
    pub state: AppState,
}

impl Harness {
    pub fn new(llm: Arc<MockLlm>, classifier: Arc<MockClassifier>, ocr: Arc<MockOcr>) -> Self {
        Self::with_settings(llm, classifier, ocr, PipelineSettings::default())
    }

    pub fn with_settings(
        llm: Arc<MockLlm>,
        classifier: Arc<MockClassifier>,
        ocr: Arc<MockOcr>,
        settings: PipelineSettings,
    ) -> Self {
        let state = AppState::new(llm.clone(), classifier.clone(), ocr.clone(), settings);
        Self {
            llm,
            classifier,
            ocr,
            state,
        }
    }

    pub fn happy() -> Self {
        Self::new(
            MockLlm::replying("**✅ In Healthy Range**\n* Glucose is normal."),
            MockClassifier::accepting(),
            MockOcr::returning(OCR_TEXT),
        )
    }

    pub fn fail_closed(self) -> Self {
        let mut settings = self.state.settings().clone();
        settings.policy = ValidationPolicy::new(settings.policy.confidence_threshold, false);
        Self::with_settings(self.llm, self.classifier, self.ocr, settings)
    }

    pub fn app(&self) -> Router {
        router(self.state.clone(), 1024 * 1024)
    }

    pub fn upstream_calls(&self) -> usize {
        self.llm.call_count() + self.classifier.call_count() + self.ocr.call_count()
    }
}

pub fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn multipart_request(field: &str, file_name: &str, mime: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {mime}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/summarize-image")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response<Body> = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// A few bytes that start like a PNG; the mocks never decode them.
pub fn fake_png() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[0u8; 64]);
    bytes
}
