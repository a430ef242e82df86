// handlers/protected/orders/create.rs - POST /api/orders
use axum::{extract::State, Extension};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::ApiJson;
use crate::database::models::{Order, OrderItem, OrderStatus, PaymentStatus};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub shipping_address: Option<String>,
}

/// POST /api/orders - price the lines from the live catalog and record a pending order.
///
/// Payment is simulated: the order is stored with `paymentStatus: pending`.
pub async fn order_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ApiJson(body): ApiJson<OrderRequest>,
) -> ApiResult<Value> {
    if body.items.is_empty() {
        return Err(ApiError::field_error("items", "Order must contain at least one item"));
    }

    let mut items = Vec::with_capacity(body.items.len());
    for line in body.items {
        if line.quantity == 0 {
            return Err(ApiError::field_error("quantity", "Quantity must be at least 1"));
        }
        let product = state
            .products
            .find(&line.product_id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Product '{}' not found", line.product_id)))?;
        if !product.in_stock {
            return Err(ApiError::bad_request(format!("Product '{}' is out of stock", product.name)));
        }
        items.push(OrderItem {
            product_id: product.id,
            name: product.name,
            price: product.price,
            quantity: line.quantity,
        });
    }

    let total = order_total(&items).ok_or_else(|| ApiError::bad_request("Order total out of range"))?;

    let order = Order {
        id: format!("order-{}", Uuid::new_v4().simple()),
        user_id: auth_user.id().to_string(),
        items,
        total,
        status: OrderStatus::Pending,
        payment_status: PaymentStatus::Pending,
        shipping_address: body.shipping_address.or_else(|| auth_user.0.address.clone()),
        created_at: Utc::now(),
    };

    let order = state.orders.insert(order).await?;
    tracing::info!("Order '{}' placed by '{}' for {}", order.id, order.user_id, order.total);

    Ok(ApiResponse::created(json!({
        "message": "Order created successfully",
        "order": order
    })))
}

/// Sum of `price * quantity` over the lines, or `None` if it does not fit a `Decimal`.
fn order_total(items: &[OrderItem]) -> Option<Decimal> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        item.price
            .checked_mul(Decimal::from(item.quantity))
            .and_then(|line| total.checked_add(line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cents: i64, quantity: u32) -> OrderItem {
        OrderItem {
            product_id: "prod-x".to_string(),
            name: "Item".to_string(),
            price: Decimal::new(cents, 2),
            quantity,
        }
    }

    #[test]
    fn total_sums_lines() {
        assert_eq!(order_total(&[line(1299, 2), line(2400, 1)]), Some(Decimal::new(4998, 2)));
    }

    #[test]
    fn total_overflow_is_none() {
        let huge = OrderItem { price: Decimal::MAX, ..line(0, 2) };
        assert_eq!(order_total(&[huge]), None);

        let half = OrderItem { price: Decimal::MAX, ..line(0, 1) };
        assert_eq!(order_total(&[half.clone(), half]), None);
    }
}
