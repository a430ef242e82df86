// handlers/public/vendors/products.rs - GET /api/vendors/:id/products
use axum::extract::{Path, State};
use serde_json::Value;

use crate::api::{list_envelope, ApiQuery};
use crate::database::models::Product;
use crate::error::ApiError;
use crate::handlers::public::products::product_filter;
use crate::middleware::{ApiResponse, ApiResult};
use crate::query::ListQuery;
use crate::state::AppState;

/// GET /api/vendors/:id/products - one vendor's catalog, same filters as /api/products.
pub async fn vendor_products_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Value> {
    if state.vendors.find(&id).await?.is_none() {
        return Err(ApiError::not_found("Vendor not found"));
    }

    let filter = product_filter(&query)?;
    let products = state.products.filter(&|p: &Product| p.vendor == id).await?;
    Ok(ApiResponse::success(list_envelope("products", filter.apply(products))?))
}
