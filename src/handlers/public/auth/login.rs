// handlers/public/auth/login.rs - POST /api/auth/login

use axum::extract::State;
use serde::Deserialize;

use super::utils::TokenResponse;
use crate::api::{shape_user, ApiJson, Audience};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - exchange email and password for a token.
///
/// Unknown emails and wrong passwords both answer 401 "Invalid credentials".
pub async fn login_post(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> ApiResult<TokenResponse> {
    let (user, token) = state.resolver.login(&body.email, &body.password).await?;

    Ok(ApiResponse::success(TokenResponse {
        message: "Login successful",
        token,
        user: shape_user(&user, Audience::Owner),
    }))
}
