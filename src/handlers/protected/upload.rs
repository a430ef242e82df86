// handlers/protected/upload.rs - POST /api/upload
use axum::Extension;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::ApiJson;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

/// Descriptor for a file the storage collaborator would hold. Nothing is stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDescriptor {
    pub id: String,
    pub filename: String,
    pub content_type: String,
    pub url: String,
    pub uploaded_by: String,
    pub uploaded_at: chrono::DateTime<Utc>,
}

/// POST /api/upload - placeholder descriptor.
pub async fn upload_post(
    Extension(auth_user): Extension<AuthUser>,
    ApiJson(body): ApiJson<UploadRequest>,
) -> ApiResult<UploadDescriptor> {
    let id = Uuid::new_v4().simple().to_string();
    let filename = body
        .filename
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| format!("{}.bin", id));

    Ok(ApiResponse::created(UploadDescriptor {
        url: format!("/uploads/{}/{}", id, filename),
        id,
        filename,
        content_type: body
            .content_type
            .unwrap_or_else(|| "application/octet-stream".to_string()),
        uploaded_by: auth_user.id().to_string(),
        uploaded_at: Utc::now(),
    }))
}
