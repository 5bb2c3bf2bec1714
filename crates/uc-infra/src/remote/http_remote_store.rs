//! HTTP/JSON client for the clipboard history server.
//!
//! | Operation | Request | Outcome |
//! |-----------|---------|---------|
//! | list | `GET /api/clipboard` | JSON array, server order |
//! | touch | `PUT /api/clipboard/{hash}/touch` | 2xx touched, 404 not found |
//! | create | `POST /api/clipboard` | 2xx created |

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use tracing::debug;

use uc_core::ports::{RemoteStoreError, RemoteStorePort, TouchOutcome};
use uc_core::{ContentFingerprint, NewClipboardEntry, RemoteClipboardEntry};

const ENTRIES_PATH: &str = "/api/clipboard";

pub struct HttpRemoteStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemoteStore {
    /// Every request made through this store is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn entries_url(&self) -> String {
        format!("{}{}", self.base_url, ENTRIES_PATH)
    }

    fn touch_url(&self, hash: &ContentFingerprint) -> String {
        format!("{}{}/{}/touch", self.base_url, ENTRIES_PATH, hash)
    }
}

#[async_trait]
impl RemoteStorePort for HttpRemoteStore {
    async fn list_entries(&self) -> Result<Vec<RemoteClipboardEntry>, RemoteStoreError> {
        let response = self
            .client
            .get(self.entries_url())
            .send()
            .await
            .map_err(map_request_error)?;
        let response = ensure_success(response)?;

        let body = response.bytes().await.map_err(map_request_error)?;
        let entries: Vec<RemoteClipboardEntry> = serde_json::from_slice(&body)
            .map_err(|e| RemoteStoreError::Decode(e.to_string()))?;

        debug!(count = entries.len(), "Listed remote entries");
        Ok(entries)
    }

    async fn touch_entry(
        &self,
        hash: &ContentFingerprint,
    ) -> Result<TouchOutcome, RemoteStoreError> {
        let response = self
            .client
            .put(self.touch_url(hash))
            .send()
            .await
            .map_err(map_request_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(hash = %hash.short(), "Remote entry not found");
            return Ok(TouchOutcome::NotFound);
        }
        ensure_success(response)?;

        debug!(hash = %hash.short(), "Remote entry touched");
        Ok(TouchOutcome::Touched)
    }

    async fn create_entry(&self, entry: &NewClipboardEntry) -> Result<(), RemoteStoreError> {
        let response = self
            .client
            .post(self.entries_url())
            .json(entry)
            .send()
            .await
            .map_err(map_request_error)?;
        let status = ensure_success(response)?.status();

        debug!(
            hash = %entry.content_hash.short(),
            kind = %entry.kind,
            status = status.as_u16(),
            "Remote entry created"
        );
        Ok(())
    }
}

fn ensure_success(response: Response) -> Result<Response, RemoteStoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(map_status_code(status))
    }
}

fn map_status_code(code: StatusCode) -> RemoteStoreError {
    match code {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => RemoteStoreError::Timeout,
        _ if code.is_server_error() => RemoteStoreError::Server {
            status: code.as_u16(),
        },
        _ => RemoteStoreError::UnexpectedStatus {
            status: code.as_u16(),
        },
    }
}

fn map_request_error(error: reqwest::Error) -> RemoteStoreError {
    if error.is_timeout() {
        RemoteStoreError::Timeout
    } else if error.is_decode() {
        RemoteStoreError::Decode(error.to_string())
    } else if let Some(status) = error.status() {
        map_status_code(status)
    } else {
        RemoteStoreError::Network(error.to_string())
    }
}
