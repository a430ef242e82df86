use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::database::repository::Record;
use crate::query::{Field, Flag, Queryable};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float_option", default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub reviews: Vec<Review>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    /// Id of the owning vendor; resolved by lookup, never embedded in storage.
    pub vendor: String,
    pub featured: bool,
    pub in_stock: bool,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Append a review and recompute the average rating from all reviews.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        let count = self.reviews.len() as f64;
        self.rating = Some((f64::from(sum) / count * 10.0).round() / 10.0);
        self.review_count = self.reviews.len() as u32;
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Queryable for Product {
    fn text(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Name => vec![self.name.as_str()],
            Field::Description => vec![self.description.as_str()],
            Field::Category => vec![self.category.as_str()],
            Field::Tags => self.tags.iter().map(String::as_str).collect(),
            Field::Vendor => vec![self.vendor.as_str()],
            _ => vec![],
        }
    }

    fn sort_name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Option<Decimal> {
        Some(self.price)
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Featured => self.featured,
            Flag::InStock => self.in_stock,
            Flag::Verified => false,
        }
    }
}
