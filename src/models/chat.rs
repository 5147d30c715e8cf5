//! Chat widget request/response models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Visitor message posted from the chat widget. Bounded because the upstream
/// API charges per token; unbounded input is never forwarded.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 4096, message = "Message is required"))]
    pub message: String,
}

/// Assistant reply relayed to the widget
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_rejected() {
        let req = ChatRequest {
            message: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_oversized_message_rejected() {
        let req = ChatRequest {
            message: "a".repeat(5000),
        };
        assert!(req.validate().is_err());
    }
}
