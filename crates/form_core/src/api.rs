use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{ShortenRequest, ShortenResponse};
use url::Url;

use crate::error::ShortenError;

/// Bounded wait before an in-flight request is failed as a transport
/// error; there is no user-facing cancellation.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait ShortenApi: Send + Sync {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ShortenError>;
}

pub struct HttpShortenApi {
    http: Client,
    base_url: String,
}

impl HttpShortenApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url).with_context(|| format!("invalid API base url: {base_url}"))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ShortenApi for HttpShortenApi {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ShortenError> {
        let response = self
            .http
            .post(format!("{}/api/v1/urls", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Body may be JSON, plain text, or empty; read it raw and
            // let the error derivation pick the best message.
            let raw_body = response.text().await.unwrap_or_default();
            return Err(ShortenError::from_response(status, &raw_body));
        }

        Ok(response.json().await?)
    }
}
