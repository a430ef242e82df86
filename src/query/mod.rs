pub mod error;
pub mod filter;
pub mod filter_order;
pub mod paginate;
pub mod params;
pub mod types;

pub use error::QueryError;
pub use filter::Filter;
pub use params::ListQuery;
pub use types::*;
