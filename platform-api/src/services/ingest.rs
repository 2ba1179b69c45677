//! Document ingestion: sanitize, key, forward to the blob store.

use std::sync::Arc;

use uuid::Uuid;

use crate::services::{ObjectStore, ServiceError};
use crate::utils::filename;

/// One uploaded file as received from the request layer.
pub struct FilePayload {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct IngestService {
    store: Arc<dyn ObjectStore>,
}

impl IngestService {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Upload a batch of files and return their public URLs in input
    /// order.
    ///
    /// Each key is a fresh 128-bit random hex token prefixed to the
    /// sanitized filename, so identical input names never collide.
    ///
    /// The batch is not atomic: when file k of n fails, files 1..k-1
    /// are already durable in the store and stay there; the whole call
    /// still reports the failure. No compensation is attempted.
    pub async fn upload(&self, files: Vec<FilePayload>) -> Result<Vec<String>, ServiceError> {
        if files.is_empty() {
            return Err(ServiceError::MissingPayload);
        }

        let mut links = Vec::with_capacity(files.len());
        for file in files {
            let safe_name = filename::sanitize(&file.name);
            let key = format!("{}_{}", Uuid::new_v4().simple(), safe_name);

            tracing::info!(
                original = %file.name,
                key = %key,
                size = file.bytes.len(),
                "Uploading document"
            );

            self.store.put(&key, file.bytes).await?;
            links.push(self.store.public_url(&key));
        }

        Ok(links)
    }
}
