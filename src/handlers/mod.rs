// handlers/mod.rs - three security tiers
//
// Public (no auth) → Protected (bearer token, any role) → Elevated (admin role)
// Role-specific routes inside the protected tier get their gate from the router.
pub mod elevated;
pub mod protected;
pub mod public;
