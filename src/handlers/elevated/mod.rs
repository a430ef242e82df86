// handlers/elevated/mod.rs - admin role required (/api/admin/*)
pub mod admin;
