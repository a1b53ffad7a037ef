use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

use crate::config::Config;
use crate::types::{MonitorError, PendingCount, PollFailure};

use super::api::PendingResponse;
use super::helpers::join_url;
use super::source::PendingSource;

#[derive(Clone)]
pub struct PendingClient {
    http: Client,
    base_url: String,
    endpoint_path: String,
}

impl PendingClient {
    /// Prepare an HTTP client for the configured server.
    pub fn from_config(config: &Config) -> Result<Self, MonitorError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(MonitorError::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            endpoint_path: config.endpoint_path.clone(),
        })
    }

    pub fn endpoint_url(&self) -> String {
        join_url(&self.base_url, &self.endpoint_path)
    }

    /// Fetch the pending count once.
    pub async fn fetch_pending(&self) -> Result<PendingCount, PollFailure> {
        let body: Value = self.get_json(&self.endpoint_path).await?;
        PendingResponse::from_value(body)?.into_count()
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, PollFailure>
    where
        T: DeserializeOwned,
    {
        let url = join_url(&self.base_url, path);
        trace!(url = %url, "GET");
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(PollFailure::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| PollFailure::Decode(err.to_string()))
    }
}

#[async_trait]
impl PendingSource for PendingClient {
    async fn fetch(&self) -> Result<PendingCount, PollFailure> {
        self.fetch_pending().await
    }
}
