pub mod role;
pub mod user;

pub use role::{Role, CANONICAL_ROLES};
pub use user::{User, UserView};
