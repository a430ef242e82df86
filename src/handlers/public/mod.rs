// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition plus read-only catalog browsing.
pub mod auth;
pub mod products;
pub mod vendors;
