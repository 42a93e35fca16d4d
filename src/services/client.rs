use anyhow::Context;
use reqwest::Method;
use serde_json::Value;

use crate::config::ClientConfig;

/// Client for the Trucky API. Every endpoint method resolves to the parsed JSON body,
/// or `None` when the request or the parse failed.
#[derive(Debug, Clone)]
pub struct TruckyClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl Default for TruckyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TruckyClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            config: ClientConfig::default(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: ClientConfig::with_service_url(base_url),
        }
    }

    pub fn from_config(config: ClientConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn service_url(&self) -> &str {
        &self.config.service_url
    }

    /// Full URL for an endpoint path. Caller-supplied values in `endpoint` are not escaped.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.service_url, endpoint)
    }

    /// Issues the request and parses the body as JSON whatever the HTTP status.
    /// Failures are logged and turned into `None`.
    pub async fn execute_request(&self, method: Method, endpoint: &str) -> Option<Value> {
        let url = self.url_for(endpoint);

        match self.fetch_json(method, &url).await {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::debug!("Trucky API request {}: {:#}", url, e);
                None
            }
        }
    }

    pub(crate) async fn get(&self, endpoint: &str) -> Option<Value> {
        self.execute_request(Method::GET, endpoint).await
    }

    async fn fetch_json(&self, method: Method, url: &str) -> anyhow::Result<Value> {
        let resp = self
            .client
            .request(method, url)
            .send()
            .await
            .context("request failed")?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!("Trucky API {} answered with status {}", url, status);
        }

        resp.json::<Value>()
            .await
            .with_context(|| format!("invalid JSON body (status {})", status))
    }
}
