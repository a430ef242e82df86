// handlers/protected/auth/mod.rs - the principal's own account
pub mod password;
pub mod profile;
pub mod whoami;

pub use password::password_put;
pub use profile::profile_put;
pub use whoami::whoami_get;
