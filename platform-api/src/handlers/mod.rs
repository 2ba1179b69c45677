pub mod documents;
pub mod health;
pub mod users;

pub use documents::upload_documents;
pub use health::health_check;
pub use users::{all_users, delete_user, get_user, login, register, users_by_role};
