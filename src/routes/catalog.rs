//! Testimonial, job, and news route handlers
//!
//! Unfiltered full-catalog reads; no pagination.

use crate::error::ApiResult;
use crate::models::{Job, News, Testimonial};
use crate::state::SharedState;
use axum::{extract::State, Json};

pub async fn list_testimonials(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Testimonial>>> {
    Ok(Json(state.storage.list_testimonials().await?))
}

pub async fn list_jobs(State(state): State<SharedState>) -> ApiResult<Json<Vec<Job>>> {
    Ok(Json(state.storage.list_jobs().await?))
}

pub async fn list_news(State(state): State<SharedState>) -> ApiResult<Json<Vec<News>>> {
    Ok(Json(state.storage.list_news().await?))
}
