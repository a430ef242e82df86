// handlers/elevated/admin/mod.rs - user listing and marketplace stats
pub mod stats;
pub mod users;

pub use stats::stats_get;
pub use users::users_get;
