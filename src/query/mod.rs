//! DNS-over-HTTPS query execution.
//!
//! This module provides:
//! - The DoH JSON envelope types
//! - `QueryExecutor`, which performs the request and classifies the outcome
//! - `execute`, the one-shot entry point using the built-in providers

mod executor;
mod types;

use crate::error_handling::QueryError;
use crate::provider::ProviderRegistry;

// Re-export public API
pub use executor::{build_query_url, QueryExecutor};
pub use types::{AnswerRecord, DohResponse, EnrichedRecord, Question, QueryOutcome, QueryResult};

/// Runs one query against a built-in provider with the default clients.
///
/// Equivalent to `QueryExecutor::new(ProviderRegistry::default())` followed by
/// [`QueryExecutor::execute`].
pub async fn execute(
    query_type: &str,
    domain: &str,
    enable_whois: bool,
    provider: &str,
) -> QueryResult {
    let executor = QueryExecutor::new(ProviderRegistry::default()).map_err(QueryError::Transport)?;
    executor
        .execute(query_type, domain, enable_whois, provider)
        .await
}
