//! Configuration constants.
//!
//! Timeouts, protocol constants and defaults shared by the query executor,
//! the WHOIS adapter and the CLI.

use std::time::Duration;

// Network operation timeouts
/// Overall DoH request deadline, measured from request start until the body is read.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(10);
/// Per-attempt WHOIS deadline, independent of `QUERY_TIMEOUT`.
/// Covers client setup and every server the lookup is referred to.
pub const WHOIS_TIMEOUT: Duration = Duration::from_secs(5);

// DoH protocol
/// Media type requested from the provider's JSON API.
pub const DNS_JSON_MEDIA_TYPE: &str = "application/dns-json";
/// Provider used when `--provider` is not given.
pub const DEFAULT_PROVIDER: &str = "cloudflare";

/// DNS record types whose `data` field carries an IP address (A, AAAA).
/// Only these records are eligible for WHOIS enrichment.
pub const IP_RECORD_TYPES: &[i64] = &[1, 28];

/// Returns `true` if the given DNS RR type carries an IP address.
pub fn is_ip_record_type(rr_type: i64) -> bool {
    IP_RECORD_TYPES.contains(&rr_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_record_types() {
        assert!(is_ip_record_type(1));
        assert!(is_ip_record_type(28));
        assert!(!is_ip_record_type(5)); // CNAME
        assert!(!is_ip_record_type(15)); // MX
        assert!(!is_ip_record_type(16)); // TXT
    }

    #[test]
    fn test_whois_timeout_shorter_than_query_timeout() {
        assert!(WHOIS_TIMEOUT < QUERY_TIMEOUT);
    }
}
