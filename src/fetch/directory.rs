// src/fetch/directory.rs
// =============================================================================
// Downloads one directory page.
//
// Each call:
// 1. Picks a User-Agent from the identity pool
// 2. Sends a single GET with that header and the configured timeout
// 3. Returns the body text, or a FetchError saying what went wrong
//
// There is no retry and no backoff: one attempt per seed, and the harvester
// decides what a failure means (it means "no links from this seed").
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use tracing::debug;

use super::identity::random_user_agent;
use crate::error::FetchError;

/// Timeout applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can turn a URL into page HTML.
///
/// The harvester is generic over this so tests can swap the network out.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Production fetcher backed by reqwest.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    client: Client,
    timeout: Duration,
}

impl DirectoryFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }
}

impl Default for DirectoryFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl Fetch for DirectoryFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let user_agent = random_user_agent();
        debug!(%url, %user_agent, "fetching directory page");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))
    }
}
