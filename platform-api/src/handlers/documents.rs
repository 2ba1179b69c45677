use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

use crate::dtos::UploadResponse;
use crate::services::FilePayload;
use crate::startup::AppState;

/// Multipart field carrying the uploaded files. Fixed by the client
/// contract.
pub const UPLOAD_FIELD: &str = "imagens";

/// Per-file size cap.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub async fn upload_documents(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or("unnamed").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e)))?
            .to_vec();

        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "File '{}' too large (max 20MB)",
                name
            )));
        }

        files.push(FilePayload { name, bytes: data });
    }

    // An empty batch fails as MissingPayload (400) before any store call.
    let links = state.ingest.upload(files).await?;

    Ok(Json(UploadResponse { links }))
}
