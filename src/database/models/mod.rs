pub mod order;
pub mod product;
pub mod user;
pub mod vendor;

pub use order::{Order, OrderItem, OrderStatus, PaymentStatus};
pub use product::{Product, Review};
pub use user::User;
pub use vendor::Vendor;
