//! HTTP API: routes, handlers and response shaping

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod router;

pub use crate::core::state::AppState;
pub use helpers::ApiError;
pub use router::router;
