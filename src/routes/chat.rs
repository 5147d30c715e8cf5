//! Chat widget route handler
//!
//! Stateless pass-through to the chat completion client. Without a
//! configured credential the endpoint still answers 200, with the canned
//! fallback reply.

use crate::chat::FALLBACK_REPLY;
use crate::error::{validation_error, ApiResult, AppError};
use crate::models::{ChatRequest, ChatResponse};
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;
use validator::Validate;

/// Answer one chat widget message
pub async fn send_message(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    request.validate().map_err(|e| validation_error(&e))?;

    if !state.chat.is_configured() {
        debug!("Chat credential absent, serving fallback reply");
        return Ok(Json(ChatResponse {
            message: FALLBACK_REPLY.to_string(),
        }));
    }

    let reply = state.chat.complete(&request.message).await?;
    Ok(Json(ChatResponse { message: reply }))
}
