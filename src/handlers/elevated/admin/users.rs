// handlers/elevated/admin/users.rs - GET /api/admin/users
use axum::extract::State;
use serde_json::Value;

use crate::api::{list_envelope, shape_user, ApiQuery, Audience};
use crate::middleware::{ApiResponse, ApiResult};
use crate::query::{Field, ListQuery};
use crate::state::AppState;

/// GET /api/admin/users - paged principals, credentials stripped.
pub async fn users_get(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Value> {
    let mut filter = query.filter()?;
    filter
        .where_contains(&[Field::Name, Field::Email], query.search.as_deref())
        .where_eq(Field::Role, query.role.as_deref().map(str::to_ascii_lowercase).as_deref());

    let page = filter
        .apply(state.users.all().await?)
        .map(|user| shape_user(&user, Audience::Admin));
    Ok(ApiResponse::success(list_envelope("users", page)?))
}
