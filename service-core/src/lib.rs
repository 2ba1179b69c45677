//! service-core: Shared infrastructure for platform services.
pub mod config;
pub mod error;
pub mod observability;
