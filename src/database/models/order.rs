use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::database::repository::Record;
use crate::query::{Field, Queryable};

/// Orders are never fulfilled, so every order stays `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

/// Payments are simulated; nothing ever moves an order past `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Queryable for Order {
    fn text(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Name => self.items.iter().map(|i| i.name.as_str()).collect(),
            _ => vec![],
        }
    }

    fn sort_name(&self) -> &str {
        &self.id
    }

    fn price(&self) -> Option<Decimal> {
        Some(self.total)
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(serde_json::to_value(OrderStatus::Pending).unwrap(), "pending");
        assert_eq!(serde_json::to_value(PaymentStatus::Pending).unwrap(), "pending");
    }
}
