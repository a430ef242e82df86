// handlers/public/products/categories.rs - GET /api/products/categories
use axum::extract::State;
use serde::Serialize;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// GET /api/products/categories - distinct categories in first-seen order.
pub async fn categories_get(State(state): State<AppState>) -> ApiResult<Value> {
    let mut categories: Vec<CategoryCount> = Vec::new();
    for product in state.products.all().await? {
        match categories.iter_mut().find(|c| c.name == product.category) {
            Some(entry) => entry.count += 1,
            None => categories.push(CategoryCount {
                name: product.category,
                count: 1,
            }),
        }
    }

    Ok(ApiResponse::success(json!({ "categories": categories })))
}
