use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{AuthError, Role};
use crate::database::models::User;
use crate::error::ApiError;
use crate::state::AppState;

/// Principal resolved for the current request.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

/// Resolve the bearer token to a principal and attach it to the request.
/// Handlers behind this layer read `Extension<AuthUser>`; no further lookups happen.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(&headers)?;

    let user = state.resolver.resolve(token).await.map_err(|e| {
        tracing::debug!("Rejected request to {}: {}", request.uri().path(), e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(AuthUser(user));
    Ok(next.run(request).await)
}

/// `Ok(None)` when no credential was sent; `InvalidToken` when one was sent in the wrong shape.
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(auth_header) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header.to_str().map_err(|_| AuthError::InvalidToken)?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if token.trim().is_empty() => Ok(None),
        Some(token) => Ok(Some(token.trim())),
        None => Err(AuthError::InvalidToken),
    }
}
