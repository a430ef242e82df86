// handlers/protected/mod.rs - bearer token required
//
// Every handler here runs behind `jwt_auth_middleware` and reads the resolved
// principal from `Extension<AuthUser>`. Orders are customer-only and the vendor
// module is vendor-only; the router attaches those role gates.
pub mod auth;
pub mod orders;
pub mod reviews;
pub mod upload;
pub mod vendor;
