use crate::error::{Error, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 8_000;

/// Timeout-bounded JSON fetcher shared by all providers.
///
/// One invocation makes exactly one attempt. The request future is dropped
/// when the timeout elapses, which cancels the in-flight request without
/// touching sibling fetches.
pub struct HttpClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout_ms: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("dayfacts/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(Self {
            http,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Fetch one endpoint and parse the body as JSON.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "fetching");

        let response = self.http.get(url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "non-success response");
            return Err(Error::Http(status.as_u16()));
        }

        let body: Value = response.json().await?;
        debug!(url, "response parsed");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_default_timeout() {
        let client = HttpClient::new(DEFAULT_TIMEOUT_MS).unwrap();
        assert_eq!(client.timeout, Duration::from_millis(8_000));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Reserved TLD, never resolves; no network round-trip succeeds.
        let client = HttpClient::new(2_000).unwrap();
        let err = client
            .get_json("http://dayfacts.invalid/feed")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network(_) | Error::Timeout));
    }
}
