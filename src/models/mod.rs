//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains all entity records and request/response structures used by the API.

pub mod catalog;
pub mod chat;
pub mod lead;
pub mod project;

// Re-export commonly used types
pub use catalog::*;
pub use chat::*;
pub use lead::*;
pub use project::*;

use serde::Serialize;

/// Message-only response, used for errors and the not-found body
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
