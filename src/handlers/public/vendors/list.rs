// handlers/public/vendors/list.rs - GET /api/vendors
use axum::extract::State;
use serde_json::Value;

use crate::api::{list_envelope, ApiQuery};
use crate::middleware::{ApiResponse, ApiResult};
use crate::query::{Field, Flag, ListQuery};
use crate::state::AppState;

/// GET /api/vendors - filtered, sorted, paged vendor directory.
pub async fn vendors_get(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Value> {
    let mut filter = query.filter()?;
    filter
        .where_eq(Field::Category, query.category.as_deref())
        .where_contains(&[Field::Name, Field::Description, Field::Tags], query.search.as_deref())
        .where_contains(&[Field::Location], query.location.as_deref())
        .where_flag(Flag::Verified, query.verified()?)
        .where_flag(Flag::Featured, query.featured()?);

    let page = filter.apply(state.vendors.all().await?);
    Ok(ApiResponse::success(list_envelope("vendors", page)?))
}
