//! Client for the `/api/random` endpoint.

use async_trait::async_trait;
use http::header::ACCEPT;
use spinwheel_branding::RANDOM_ENDPOINT_PATH;
use tracing::debug;

use crate::error::ApiError;
use crate::error::TransportError;
use crate::provider::Provider;
use crate::sample::RandomSample;
use crate::sample::parse_random_response;
use crate::source::RandomSource;

pub struct RandomClient {
    http: reqwest::Client,
    provider: Provider,
}

impl RandomClient {
    pub fn new(http: reqwest::Client, provider: Provider) -> Self {
        Self { http, provider }
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    fn path(&self) -> &'static str {
        RANDOM_ENDPOINT_PATH
    }

    /// Performs the GET and returns the body of a successful response.
    ///
    /// The provider timeout covers reading the body as well as the headers.
    async fn execute(&self) -> Result<String, TransportError> {
        let url = self.provider.url_for_path(self.path());
        debug!(%url, timeout = ?self.provider.timeout, "requesting random fraction");

        let mut request = self.http.get(&url).header(ACCEPT, "application/json");
        if let Some(timeout) = self.provider.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            debug!(%status, "random source answered with an error status");
            return Err(TransportError::Http {
                status,
                body: (!body.is_empty()).then_some(body),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl RandomSource for RandomClient {
    async fn fetch(&self) -> Result<RandomSample, ApiError> {
        let body = self.execute().await?;
        let sample = parse_random_response(&body, self.provider.validation)?;
        debug!(value = sample.value, source = %sample.source, "received random fraction");
        Ok(sample)
    }

    fn location(&self) -> String {
        self.provider.base_url.clone()
    }
}
