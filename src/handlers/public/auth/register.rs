// handlers/public/auth/register.rs - POST /api/auth/register

use axum::extract::State;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use super::utils::{validate_email_format, validate_password, TokenResponse};
use crate::api::{shape_user, ApiJson, Audience};
use crate::auth::{CredentialHash, Role};
use crate::database::models::{User, Vendor};
use crate::database::RepositoryError;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// `customer` (default) or `vendor`.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Storefront name for vendor accounts; defaults to `name`.
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// POST /api/auth/register - create a principal and log it in.
///
/// A duplicate email fails with 400 and leaves the existing record untouched.
/// Vendor registrations also create the vendor profile the account owns.
pub async fn register_post(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> ApiResult<TokenResponse> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(ApiError::field_error("name", "Name is required"));
    }
    let email = body.email.trim().to_string();
    validate_email_format(&email).map_err(|e| ApiError::field_error("email", e))?;
    validate_password(&body.password).map_err(|e| ApiError::field_error("password", e))?;

    let role = match body.role.as_deref() {
        None => Role::Customer,
        Some(raw) => raw.parse::<Role>().map_err(|e| ApiError::field_error("role", e))?,
    };
    if role == Role::Admin {
        return Err(ApiError::bad_request("Admin accounts cannot be self-registered"));
    }

    let now = Utc::now();
    let vendor_id = (role == Role::Vendor).then(|| format!("vendor-{}", Uuid::new_v4().simple()));

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.clone(),
        credential: CredentialHash::new(&body.password),
        role,
        phone: body.phone,
        avatar: None,
        address: None,
        vendor_id: vendor_id.clone(),
        created_at: now,
        last_login: Some(now),
    };

    let user = state
        .users
        .insert_unique(user, &|existing: &User| existing.has_email(&email))
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                tracing::info!("Registration rejected: '{}' already registered", email);
                ApiError::conflict("User already exists with this email")
            }
            other => other.into(),
        })?;

    if let Some(vendor_id) = vendor_id {
        let vendor = Vendor {
            id: vendor_id,
            name: body.store_name.unwrap_or_else(|| user.name.clone()),
            description: String::new(),
            category: "General".to_string(),
            location: body.location.unwrap_or_default(),
            logo: None,
            rating: None,
            review_count: 0,
            verified: false,
            featured: false,
            tags: vec![],
            created_at: Some(now),
        };
        state.vendors.insert(vendor).await?;
    }

    let token = state.tokens().issue(&user.id).map_err(ApiError::internal)?;
    tracing::info!("Registered {} '{}'", user.role, user.id);

    Ok(ApiResponse::created(TokenResponse {
        message: "User registered successfully",
        token,
        user: shape_user(&user, Audience::Owner),
    }))
}
