//! HTTP client initialization.

use crate::config::QUERY_TIMEOUT;
use reqwest::ClientBuilder;

/// User-Agent sent with every DoH request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Initializes the HTTP client used for DoH requests.
///
/// Creates a `reqwest::Client` configured with:
/// - An overall 10 second deadline covering connect, request and body
/// - A `doh/<version>` User-Agent
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(QUERY_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
}
