use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::auth::Role;
use crate::database::models::{Product, User, Vendor};
use crate::query::Page;

/// Who a shaped record is being returned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// The principal looking at their own record.
    Owner,
    /// An administrator listing principals; adds activity timestamps.
    Admin,
}

/// The only outbound form of a `User`. There is no credential field to leak.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

pub fn shape_user(user: &User, audience: Audience) -> PublicUser {
    PublicUser {
        id: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        phone: user.phone.clone(),
        avatar: user.avatar.clone(),
        address: user.address.clone(),
        vendor_id: user.vendor_id.clone(),
        created_at: user.created_at,
        last_login: match audience {
            Audience::Admin => user.last_login,
            Audience::Owner => None,
        },
    }
}

/// Serialize a product with its vendor reference replaced by the vendor object.
/// A dangling reference is left as the bare id.
pub fn shape_product(product: &Product, vendor: Option<&Vendor>) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(product)?;
    if let (Some(vendor), Value::Object(map)) = (vendor, &mut value) {
        map.insert("vendorId".to_string(), Value::String(product.vendor.clone()));
        map.insert("vendor".to_string(), serde_json::to_value(vendor)?);
    }
    Ok(value)
}

/// `{ <plural>: [...], pagination: { currentPage, totalPages, total<Plural>, hasNext, hasPrev } }`
pub fn list_envelope<T: Serialize>(plural: &str, page: Page<T>) -> Result<Value, serde_json::Error> {
    let p = page.pagination;
    let mut pagination = Map::new();
    pagination.insert("currentPage".to_string(), json!(p.current_page));
    pagination.insert("totalPages".to_string(), json!(p.total_pages));
    pagination.insert(format!("total{}", capitalize(plural)), json!(p.total));
    pagination.insert("hasNext".to_string(), json!(p.has_next));
    pagination.insert("hasPrev".to_string(), json!(p.has_prev));

    let mut envelope = Map::new();
    envelope.insert(plural.to_string(), serde_json::to_value(page.items)?);
    envelope.insert("pagination".to_string(), Value::Object(pagination));
    Ok(Value::Object(envelope))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
