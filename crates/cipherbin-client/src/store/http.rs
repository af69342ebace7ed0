//! HTTP store client for the cipherbin API.

use std::time::Duration;

use async_trait::async_trait;

use super::MessageStore;
use crate::{error::StoreError, message::Message};

/// Transport timeout applied to every store call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the cipherbin HTTP API.
///
/// Thin transport wrapper: what to send and how to interpret absence are
/// decided by the lifecycle and the [`MessageStore`] contract, not here.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    api_base_url: String,
}

impl HttpStore {
    /// Build a store client for the API at `api_base_url`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Transport`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(api_base_url: &str) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| StoreError::Transport { reason: err.to_string() })?;

        Ok(Self { client, api_base_url: api_base_url.trim_end_matches('/').to_string() })
    }
}

fn transport_error(err: &reqwest::Error) -> StoreError {
    let reason = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "unable to reach the store".to_string()
    } else {
        err.to_string()
    };

    StoreError::Transport { reason }
}

#[async_trait]
impl MessageStore for HttpStore {
    async fn put(&self, message: &Message) -> Result<(), StoreError> {
        let url = format!("{}/msg", self.api_base_url);

        let response = self
            .client
            .post(url)
            .json(message)
            .send()
            .await
            .map_err(|err| transport_error(&err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected { status: status.as_u16() });
        }

        Ok(())
    }

    async fn get(&self, url: &str) -> Result<Message, StoreError> {
        let response = self.client.get(url).send().await.map_err(|err| transport_error(&err))?;

        // Every non-success status collapses into NotFound: the caller must
        // not learn whether the record ever existed.
        if !response.status().is_success() {
            return Err(StoreError::NotFound);
        }

        response
            .json::<Message>()
            .await
            .map_err(|err| StoreError::Transport { reason: err.to_string() })
    }
}
