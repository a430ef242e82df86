use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Text-bearing attributes a predicate can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Category,
    Tags,
    Location,
    Vendor,
    Email,
    Role,
}

/// Boolean attributes a predicate can target. Records without the flag read as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Featured,
    Verified,
    InStock,
}

/// One conjunct of a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Any value of `field` equals `value` exactly.
    Equals { field: Field, value: String },
    /// `needle` (stored lowercased) is a substring of any value of any listed field.
    Contains { fields: Vec<Field>, needle: String },
    /// Inclusive price bounds; a record without a price never matches.
    PriceRange { min: Option<Decimal>, max: Option<Decimal> },
    Flag { flag: Flag, value: bool },
}

/// The fixed set of total orders a listing can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Name,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    Newest,
}

/// Attribute access the query engine needs from a record.
pub trait Queryable {
    /// All values of `field`; empty when the record has no such attribute.
    fn text(&self, field: Field) -> Vec<&str>;

    fn sort_name(&self) -> &str;

    fn price(&self) -> Option<Decimal> {
        None
    }

    fn rating(&self) -> Option<f64> {
        None
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn flag(&self, _flag: Flag) -> bool {
        false
    }
}

/// A resolved, always-positive page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: usize,
    pub total: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
