// handlers/public/products/featured.rs - GET /api/products/featured
use axum::extract::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::ApiQuery;
use crate::database::models::Product;
use crate::middleware::{ApiResponse, ApiResult};
use crate::query::filter_order::FilterOrder;
use crate::query::SortKey;
use crate::state::AppState;

const DEFAULT_FEATURED_LIMIT: usize = 8;

#[derive(Debug, Default, Deserialize)]
pub struct FeaturedQuery {
    pub limit: Option<i64>,
}

/// GET /api/products/featured - featured products, best rated first.
pub async fn featured_get(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FeaturedQuery>,
) -> ApiResult<Value> {
    let limit = match query.limit {
        Some(l) if l > 0 => usize::try_from(l).unwrap_or(DEFAULT_FEATURED_LIMIT),
        _ => DEFAULT_FEATURED_LIMIT,
    };

    let mut products = state.products.filter(&|p: &Product| p.featured).await?;
    FilterOrder::sort(SortKey::RatingDesc, &mut products);
    products.truncate(limit);

    Ok(ApiResponse::success(json!({ "products": products })))
}
