//! WHOIS client backed by the `whois-service` crate.
//!
//! Server discovery, RDAP/WHOIS fallback and referral following are handled by
//! the crate; this wrapper bounds each lookup with a deadline and reduces the
//! response to an organization name.

use std::future::Future;
use std::time::Duration;

use crate::config::WHOIS_TIMEOUT;
use crate::error_handling::WhoisError;

use whois_service::WhoisResponse;

use super::parse::org_name_or_parsed;
use super::WhoisLookup;

/// WHOIS client with a per-lookup deadline.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    timeout: Duration,
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self {
            timeout: WHOIS_TIMEOUT,
        }
    }
}

impl WhoisClient {
    /// Creates a client with a 5 second deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the per-lookup deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured per-lookup deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Looks `query` up through the WHOIS service, bounded by the client deadline.
    ///
    /// # Errors
    ///
    /// Returns `WhoisError::Timeout` when the deadline expires and
    /// `WhoisError::Lookup` when the service cannot be set up or the lookup fails.
    pub async fn fetch(&self, query: &str) -> Result<WhoisResponse, WhoisError> {
        with_deadline(self.timeout, fetch_from_service(query)).await
    }
}

impl WhoisLookup for WhoisClient {
    async fn lookup(&self, query: &str) -> Result<String, WhoisError> {
        let response = self.fetch(query).await?;
        let parsed_org = response.parsed_data.and_then(|parsed| parsed.registrant_name);
        org_name_or_parsed(&response.raw_data, parsed_org)
    }
}

// Uncached: each service client serves a single lookup
async fn fetch_from_service(query: &str) -> Result<WhoisResponse, WhoisError> {
    let client = whois_service::WhoisClient::new_without_cache()
        .await
        .map_err(|e| WhoisError::Lookup(format!("failed to create WHOIS client: {e}")))?;

    let response = client
        .lookup(query)
        .await
        .map_err(|e| WhoisError::Lookup(e.to_string()))?;

    log::debug!("WHOIS for {query} answered by {}", response.whois_server);
    Ok(response)
}

/// Runs `lookup` under `timeout`, mapping expiry to `WhoisError::Timeout`.
async fn with_deadline<T, F>(timeout: Duration, lookup: F) -> Result<T, WhoisError>
where
    F: Future<Output = Result<T, WhoisError>>,
{
    tokio::time::timeout(timeout, lookup)
        .await
        .map_err(|_| WhoisError::Timeout(timeout))?
}
