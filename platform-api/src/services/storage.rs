//! External blob store client.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::config::StorageConfig;
use crate::services::ServiceError;

/// An object store addressed by key within one namespace (bucket).
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store raw bytes under `key`. Durable on `Ok`.
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), ServiceError>;

    /// Public URL for a stored key. Derivable without a network call.
    fn public_url(&self, key: &str) -> String;
}

/// Supabase-storage-style REST client.
///
/// Objects are written with `POST {base}/object/{bucket}/{key}` and read
/// publicly from `{base}/object/public/{bucket}/{key}`. Every request is
/// bounded by the configured timeout.
pub struct HttpObjectStore {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
}

impl HttpObjectStore {
    pub fn new(config: &StorageConfig) -> Result<Self, ServiceError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| ServiceError::Internal(anyhow::anyhow!("Invalid storage API key: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ServiceError::Internal(anyhow::anyhow!("Failed to build storage client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), ServiceError> {
        let url = format!("{}/object/{}/{}", self.base_url, self.bucket, key);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(data)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    ServiceError::StoreUnavailable(e.to_string())
                } else {
                    ServiceError::UploadFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // The store reports failures as {"message": ...} or {"error": ...}.
            let body: Option<serde_json::Value> = response.json().await.ok();
            let message = body
                .as_ref()
                .and_then(|v| v.get("message").or_else(|| v.get("error")))
                .and_then(|m| m.as_str())
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| format!("store returned {}", status));
            return Err(ServiceError::UploadFailed(message));
        }

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, self.bucket, key)
    }
}
