pub mod accounts;
pub mod database;
pub mod directory;
pub mod error;
pub mod ingest;
pub mod storage;

pub use accounts::AccountService;
pub use database::Database;
pub use directory::DirectoryService;
pub use error::ServiceError;
pub use ingest::{FilePayload, IngestService};
pub use storage::{HttpObjectStore, ObjectStore};
