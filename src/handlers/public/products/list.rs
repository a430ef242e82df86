// handlers/public/products/list.rs - GET /api/products
use axum::extract::State;
use serde_json::Value;

use super::product_filter;
use crate::api::{list_envelope, ApiQuery};
use crate::middleware::{ApiResponse, ApiResult};
use crate::query::ListQuery;
use crate::state::AppState;

/// GET /api/products - filtered, sorted, paged catalog.
pub async fn products_get(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Value> {
    let filter = product_filter(&query)?;
    let page = filter.apply(state.products.all().await?);
    Ok(ApiResponse::success(list_envelope("products", page)?))
}
