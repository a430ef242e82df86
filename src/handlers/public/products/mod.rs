// handlers/public/products/mod.rs - catalog browsing
pub mod categories;
pub mod featured;
pub mod list;
pub mod show;

pub use categories::categories_get;
pub use featured::featured_get;
pub use list::products_get;
pub use show::product_get;

use crate::query::{Field, Filter, Flag, ListQuery, QueryError};

/// Fields a product `search`/`q` term is matched against.
pub const PRODUCT_SEARCH_FIELDS: &[Field] = &[Field::Name, Field::Description, Field::Tags];

/// Build the product listing filter from query parameters.
pub fn product_filter(query: &ListQuery) -> Result<Filter, QueryError> {
    let mut filter = query.filter()?;
    filter
        .where_eq(Field::Category, query.category.as_deref())
        .where_eq(Field::Vendor, query.vendor.as_deref())
        .where_contains(PRODUCT_SEARCH_FIELDS, query.search.as_deref())
        .where_price(query.min_price()?, query.max_price()?)
        .where_flag(Flag::Featured, query.featured()?)
        .where_flag(Flag::InStock, query.in_stock()?);
    Ok(filter)
}
