// handlers/public/products/show.rs - GET /api/products/:id
use axum::extract::{Path, State};
use serde_json::{json, Value};

use crate::api::shape_product;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/products/:id - one product with its vendor embedded.
pub async fn product_get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let product = state
        .products
        .find(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    let vendor = state.vendors.find(&product.vendor).await?;
    if vendor.is_none() {
        tracing::warn!("Product '{}' references missing vendor '{}'", product.id, product.vendor);
    }

    Ok(ApiResponse::success(json!({
        "product": shape_product(&product, vendor.as_ref())?
    })))
}
