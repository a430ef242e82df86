// handlers/public/vendors/mod.rs - vendor directory
pub mod list;
pub mod products;
pub mod show;

pub use list::vendors_get;
pub use products::vendor_products_get;
pub use show::vendor_get;
