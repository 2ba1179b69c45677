pub mod filename;
pub mod password;

pub use filename::sanitize;
pub use password::{hash_password, verify_password, Password, PasswordHashString};
