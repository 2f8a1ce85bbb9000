//! The four report operations, independent of the HTTP layer

pub mod chat;
pub mod summarize;
pub mod translate;

pub use chat::answer_question;
pub use summarize::{summarize_image, summarize_report, summarize_text};
pub use translate::translate;
