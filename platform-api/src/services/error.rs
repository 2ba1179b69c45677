use service_core::error::AppError;
use thiserror::Error;

/// Domain failures of the credential, directory and ingestion services.
///
/// The variant name is part of every message so callers can tell the
/// failures apart from the `{error}` body alone.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("DuplicateAccount: email already registered")]
    DuplicateAccount,

    /// Deliberately covers both "no such user" and "wrong password" so
    /// the response cannot be used for account enumeration.
    #[error("InvalidCredentials: invalid email or password")]
    InvalidCredentials,

    #[error("NotFound: user not found")]
    NotFound,

    /// Zero directory matches are reported as an error, not an empty
    /// list. Carried over from the upstream contract on purpose.
    #[error("EmptyResult: no users matched the query")]
    EmptyResult,

    #[error("MissingPayload: no files in request")]
    MissingPayload,

    #[error("UploadFailed: {0}")]
    UploadFailed(String),

    #[error("StoreUnavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        let msg = err.to_string();
        match err {
            ServiceError::DuplicateAccount => AppError::Conflict(anyhow::anyhow!(msg)),
            ServiceError::InvalidCredentials => AppError::Unauthorized(anyhow::anyhow!(msg)),
            ServiceError::NotFound | ServiceError::EmptyResult => {
                AppError::NotFound(anyhow::anyhow!(msg))
            }
            ServiceError::MissingPayload => AppError::BadRequest(anyhow::anyhow!(msg)),
            ServiceError::UploadFailed(_) => AppError::BadGateway(msg),
            ServiceError::StoreUnavailable(_) => AppError::ServiceUnavailable,
            ServiceError::Database(e) => AppError::DatabaseError(anyhow::Error::new(e)),
            ServiceError::Internal(e) => AppError::InternalError(e),
        }
    }
}
