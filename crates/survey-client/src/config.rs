//! Survey client settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// SkyView's batch query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://skyview.gsfc.nasa.gov/current/cgi/runquery.pl";

/// Connection and retry settings for [`crate::SkyViewClient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyClientConfig {
    pub base_url: String,
    /// Width and height of the requested cutout
    pub pixels: u32,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry (doubles each retry)
    pub initial_retry_delay_ms: u64,
    pub max_retry_delay_ms: u64,
}

impl Default for SurveyClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pixels: 300,
            timeout_secs: 60,
            max_retries: 3,
            initial_retry_delay_ms: 500,
            max_retry_delay_ms: 8_000,
        }
    }
}

impl SurveyClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Delay before each retry, in order.
    pub fn retry_delays(&self) -> impl Iterator<Item = Duration> {
        let max = Duration::from_millis(self.max_retry_delay_ms);
        let mut delay = Duration::from_millis(self.initial_retry_delay_ms);
        (0..self.max_retries).map(move |_| {
            let current = delay.min(max);
            delay = current * 2;
            current
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_delays_double_and_cap() {
        let config = SurveyClientConfig {
            max_retries: 6,
            initial_retry_delay_ms: 500,
            max_retry_delay_ms: 4_000,
            ..Default::default()
        };
        let delays: Vec<u64> = config.retry_delays().map(|d| d.as_millis() as u64).collect();
        assert_eq!(delays, vec![500, 1000, 2000, 4000, 4000, 4000]);
    }

    #[test]
    fn test_no_retries() {
        let config = SurveyClientConfig {
            max_retries: 0,
            ..Default::default()
        };
        assert_eq!(config.retry_delays().count(), 0);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: SurveyClientConfig = serde_yaml::from_str("pixels: 600\n").unwrap();
        assert_eq!(config.pixels, 600);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_retries, 3);
    }
}
