// handlers/protected/orders/show.rs - GET /api/orders/:id
use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/orders/:id - another principal's order reads as not found.
pub async fn order_get(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let order = state
        .orders
        .find(&id)
        .await?
        .filter(|o| o.user_id == auth_user.id())
        .ok_or_else(|| ApiError::not_found("Order not found"))?;

    Ok(ApiResponse::success(json!({ "order": order })))
}
