//! Configuration, shared state and request/response models

pub mod config;
pub mod languages;
pub mod models;
pub mod state;
