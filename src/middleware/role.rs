use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::auth::AuthUser;
use crate::auth::{self, AuthError, Role};
use crate::error::ApiError;

/// Role gate layered after `jwt_auth_middleware`; the required role is the layer state.
pub async fn require_role(State(role): State<Role>, request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or(AuthError::Unauthenticated)?;

    if let Err(e) = auth::require(&auth_user.0, role) {
        tracing::warn!(
            "User '{}' ({}) denied access to {}",
            auth_user.id(),
            auth_user.role(),
            request.uri().path()
        );
        return Err(e.into());
    }

    Ok(next.run(request).await)
}
