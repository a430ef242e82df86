// handlers/protected/orders/mod.rs - customer orders (customer role)
pub mod create;
pub mod list;
pub mod show;

pub use create::order_post;
pub use list::orders_get;
pub use show::order_get;
