// handlers/protected/auth/whoami.rs - GET /api/auth/me
use axum::Extension;
use serde_json::{json, Value};

use crate::api::{shape_user, Audience};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /api/auth/me - the principal attached to this request.
pub async fn whoami_get(Extension(auth_user): Extension<AuthUser>) -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "user": shape_user(&auth_user.0, Audience::Owner)
    })))
}
