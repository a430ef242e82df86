// handlers/protected/auth/profile.rs - PUT /api/auth/profile
use axum::{extract::State, Extension};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{shape_user, ApiJson, Audience};
use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// Profile fields a principal may change. Email, role and credential are not among them.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub address: Option<String>,
}

/// PUT /api/auth/profile
pub async fn profile_put(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ApiJson(update): ApiJson<ProfileUpdate>,
) -> ApiResult<Value> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(ApiError::field_error("name", "Name cannot be empty"));
        }
    }

    let user = state
        .users
        .update(
            auth_user.id(),
            Box::new(move |user: &mut User| {
                if let Some(name) = update.name {
                    user.name = name.trim().to_string();
                }
                if update.phone.is_some() {
                    user.phone = update.phone;
                }
                if update.avatar.is_some() {
                    user.avatar = update.avatar;
                }
                if update.address.is_some() {
                    user.address = update.address;
                }
            }),
        )
        .await?;

    Ok(ApiResponse::success(json!({
        "message": "Profile updated successfully",
        "user": shape_user(&user, Audience::Owner)
    })))
}
