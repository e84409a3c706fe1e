//! Blocking HTTP client for the analytics backend.
//!
//! The client itself is synchronous; [`crate::store::RemoteData`] runs each
//! request on a worker thread so the render loop never blocks on the network.

use crate::model::FetchError;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Thin wrapper over a configured `reqwest` blocking client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a client for the given base URL with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// The configured backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// `GET` an endpoint and return the raw body text.
    ///
    /// Decoding is left to the caller (the ingest layer), which owns the
    /// coercion rules for each collection shape.
    pub fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }

        response.text().map_err(|e| FetchError::Network(e.to_string()))
    }

    /// `POST` a JSON body and decode a JSON response.
    pub fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, FetchError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }

        response.json().map_err(|e| FetchError::Decode {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })
    }
}
