// handlers/elevated/admin/stats.rs - GET /api/admin/stats
use axum::extract::State;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::auth::Role;
use crate::database::models::User;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_users: usize,
    pub total_customers: usize,
    pub total_vendors: usize,
    pub total_products: usize,
    pub total_orders: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}

/// GET /api/admin/stats - collection counts. Revenue saturates at `Decimal::MAX`.
pub async fn stats_get(State(state): State<AppState>) -> ApiResult<Stats> {
    let orders = state.orders.all().await?;

    Ok(ApiResponse::success(Stats {
        total_users: state.users.count().await?,
        total_customers: state.users.filter(&|u: &User| u.role == Role::Customer).await?.len(),
        total_vendors: state.vendors.count().await?,
        total_products: state.products.count().await?,
        total_orders: orders.len(),
        total_revenue: orders.iter().fold(Decimal::ZERO, |sum, o| sum.saturating_add(o.total)),
    }))
}
