//! SkyView HTTP client with retry.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Url};
use sky_common::{LoadedImage, Survey, SurveySearch, ViewerError, ViewerResult};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::SurveyClientConfig;
use crate::query::{build_query_url, interpret_response, is_retryable_status};

/// Outcome of a single failed request.
#[derive(Debug)]
enum AttemptError {
    /// Worth trying again (transport failure or server error)
    Transient(String),
    /// Retrying would give the same answer
    Permanent(ViewerError),
}

/// Fetches survey cutouts from SkyView.
#[derive(Debug, Clone)]
pub struct SkyViewClient {
    client: Client,
    config: SurveyClientConfig,
}

impl SkyViewClient {
    pub fn new(config: SurveyClientConfig) -> ViewerResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("skyspotter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ViewerError::ConfigError(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SurveyClientConfig {
        &self.config
    }

    /// Download the raw response for one query, retrying transient failures.
    #[instrument(skip(self, survey), fields(survey = %survey.id))]
    pub async fn fetch(&self, position: &str, survey: &Survey) -> ViewerResult<Bytes> {
        let url = build_query_url(&self.config.base_url, position, survey, self.config.pixels)?;
        let mut delays = self.config.retry_delays();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match self.fetch_once(&url).await {
                Ok(body) => {
                    info!(bytes = body.len(), attempt, "Survey image downloaded");
                    return Ok(body);
                }
                Err(AttemptError::Permanent(err)) => return Err(err),
                Err(AttemptError::Transient(reason)) => match delays.next() {
                    Some(delay) => {
                        warn!(
                            error = %reason,
                            attempt,
                            max_retries = self.config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Survey request failed, retrying"
                        );
                        tokio::time::sleep(delay).await;
                    }
                    None => {
                        return Err(ViewerError::RemoteLookup(format!(
                            "survey request failed after {} attempts: {}",
                            attempt, reason
                        )));
                    }
                },
            }
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<Bytes, AttemptError> {
        debug!(url = %url, "Requesting survey image");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AttemptError::Transient(e.to_string()))?;

        let status = response.status();
        if is_retryable_status(status) {
            return Err(AttemptError::Transient(format!("HTTP {}", status)));
        }
        if !status.is_success() {
            return Err(AttemptError::Permanent(ViewerError::RemoteLookup(format!(
                "survey service answered HTTP {}",
                status
            ))));
        }

        response
            .bytes()
            .await
            .map_err(|e| AttemptError::Transient(e.to_string()))
    }
}

#[async_trait]
impl SurveySearch for SkyViewClient {
    async fn search(&self, position: &str, survey: &Survey) -> ViewerResult<LoadedImage> {
        let body = self.fetch(position, survey).await?;
        let source = format!("{} / {}", position, survey.id);
        interpret_response(body, &source)
    }
}
