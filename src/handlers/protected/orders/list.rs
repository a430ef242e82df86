// handlers/protected/orders/list.rs - GET /api/orders
use axum::{extract::State, Extension};
use serde_json::Value;

use crate::api::{list_envelope, ApiQuery};
use crate::database::models::Order;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::query::{ListQuery, SortKey};
use crate::state::AppState;

/// GET /api/orders - the principal's orders, newest first.
pub async fn orders_get(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Value> {
    let mut filter = query.filter()?;
    filter.order(SortKey::Newest);

    let user_id = auth_user.id().to_string();
    let orders = state.orders.filter(&|o: &Order| o.user_id == user_id).await?;
    Ok(ApiResponse::success(list_envelope("orders", filter.apply(orders))?))
}
