// handlers/protected/auth/password.rs - PUT /api/auth/password
use axum::{extract::State, Extension};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::ApiJson;
use crate::auth::CredentialHash;
use crate::database::models::User;
use crate::error::ApiError;
use crate::handlers::public::auth::utils::validate_password;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// PUT /api/auth/password - outstanding tokens stay valid.
pub async fn password_put(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ApiJson(body): ApiJson<PasswordChange>,
) -> ApiResult<Value> {
    if !auth_user.0.credential.verify(&body.current_password) {
        tracing::warn!("Password change for '{}' rejected: wrong current password", auth_user.id());
        return Err(ApiError::bad_request("Current password is incorrect"));
    }
    validate_password(&body.new_password).map_err(|e| ApiError::field_error("newPassword", e))?;

    let credential = CredentialHash::new(&body.new_password);
    state
        .users
        .update(auth_user.id(), Box::new(move |user: &mut User| user.credential = credential))
        .await?;

    Ok(ApiResponse::success(json!({ "message": "Password updated successfully" })))
}
