use std::cmp::Ordering;

use super::types::{Queryable, SortKey};

pub struct FilterOrder;

impl FilterOrder {
    /// Map a `sortBy` value onto a sort key. Unknown or missing values sort by name.
    pub fn parse(sort_by: Option<&str>) -> SortKey {
        let Some(raw) = sort_by else { return SortKey::Name };
        match raw.trim().to_ascii_lowercase().as_str() {
            "price-low" | "price_low" | "price-asc" | "price_asc" | "price" => SortKey::PriceAsc,
            "price-high" | "price_high" | "price-desc" | "price_desc" => SortKey::PriceDesc,
            "rating" | "rating-desc" | "top-rated" => SortKey::RatingDesc,
            "newest" | "created_at desc" | "recent" => SortKey::Newest,
            "name" | "" => SortKey::Name,
            other => {
                tracing::debug!("Unknown sort key '{}', falling back to name", other);
                SortKey::Name
            }
        }
    }

    pub fn compare<T: Queryable>(key: SortKey, a: &T, b: &T) -> Ordering {
        match key {
            SortKey::Name => a.sort_name().to_lowercase().cmp(&b.sort_name().to_lowercase()),
            SortKey::PriceAsc => a.price().unwrap_or_default().cmp(&b.price().unwrap_or_default()),
            SortKey::PriceDesc => b.price().unwrap_or_default().cmp(&a.price().unwrap_or_default()),
            SortKey::RatingDesc => b.rating().unwrap_or(0.0).total_cmp(&a.rating().unwrap_or(0.0)),
            // None < Some, so records without a timestamp land last
            SortKey::Newest => b.created_at().cmp(&a.created_at()),
        }
    }

    /// Stable sort: records comparing equal keep their input order.
    pub fn sort<T: Queryable>(key: SortKey, records: &mut [T]) {
        records.sort_by(|a, b| Self::compare(key, a, b));
    }
}
