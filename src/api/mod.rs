pub mod extract;
pub mod format;

pub use extract::{ApiJson, ApiQuery};
pub use format::{list_envelope, shape_product, shape_user, Audience, PublicUser};
