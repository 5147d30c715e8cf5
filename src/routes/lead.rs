//! Lead capture route handler
//!
//! The only endpoint that mutates state. Validation failures come back as
//! 400 with the first error's message; a malformed or field-missing body is
//! the same failure from the caller's point of view, so extractor rejections
//! map to 400 as well.

use crate::error::{validation_error, ApiResult, AppError};
use crate::models::{LeadAccepted, NewLead};
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use validator::Validate;

/// Accept an enquiry from the lead form
pub async fn create_lead(
    State(state): State<SharedState>,
    payload: Result<Json<NewLead>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LeadAccepted>)> {
    let Json(input) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    input.validate().map_err(|e| validation_error(&e))?;

    let lead = state.storage.create_lead(input).await?;
    info!("Lead captured (id: {})", lead.id);

    Ok((StatusCode::CREATED, Json(LeadAccepted { success: true })))
}
