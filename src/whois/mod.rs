//! WHOIS organization lookup.
//!
//! Resolves the organization owning an IP address (or domain) through the
//! `whois-service` crate and scans the reply for an `OrgName:`/`org-name:`
//! line.
//!
//! The adapter reports every failure through `WhoisError`; deciding that
//! enrichment is best-effort is left to the caller.

mod client;
mod parse;

use std::future::Future;

use crate::error_handling::WhoisError;

// Re-export public API
pub use client::WhoisClient;
pub use parse::{extract_org_name, org_name_or_parsed};

/// A source of WHOIS organization names.
///
/// Implemented by [`WhoisClient`]; tests substitute canned implementations.
pub trait WhoisLookup {
    /// Returns the organization name registered for `query` (an IP address or domain).
    fn lookup(&self, query: &str) -> impl Future<Output = Result<String, WhoisError>> + Send;
}
