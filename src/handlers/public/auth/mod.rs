// handlers/public/auth/mod.rs - token acquisition endpoints
pub mod login;
pub mod register;
pub mod utils;

pub use login::login_post;
pub use register::register_post;
