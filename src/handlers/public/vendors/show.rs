// handlers/public/vendors/show.rs - GET /api/vendors/:id
use axum::extract::{Path, State};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/vendors/:id
pub async fn vendor_get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let vendor = state
        .vendors
        .find(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Vendor not found"))?;

    Ok(ApiResponse::success(json!({ "vendor": vendor })))
}
