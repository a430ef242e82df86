// handlers/protected/reviews.rs - POST /api/products/:id/reviews
use axum::{
    extract::{Path, State},
    Extension,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::ApiJson;
use crate::database::models::{Product, Review};
use crate::database::RepositoryError;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// POST /api/products/:id/reviews - append a review and refresh the rating average.
pub async fn review_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<ReviewRequest>,
) -> ApiResult<Value> {
    if !(1..=5).contains(&body.rating) {
        return Err(ApiError::field_error("rating", "Rating must be between 1 and 5"));
    }

    let review = Review {
        id: Uuid::new_v4().to_string(),
        user_id: auth_user.0.id.clone(),
        user_name: auth_user.0.name.clone(),
        rating: body.rating,
        comment: body.comment.filter(|c| !c.trim().is_empty()),
        created_at: Utc::now(),
    };

    let product = state
        .products
        .update(&id, Box::new(move |product: &mut Product| product.add_review(review)))
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound(_) => ApiError::not_found("Product not found"),
            other => other.into(),
        })?;

    let review = product.reviews.last().cloned();
    Ok(ApiResponse::created(json!({
        "message": "Review added successfully",
        "review": review,
        "rating": product.rating,
        "reviewCount": product.review_count
    })))
}
