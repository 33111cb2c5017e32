//! WHOIS response parsing.
//!
//! WHOIS responses are free text; only the organization line is relied upon
//! (`OrgName:` for ARIN, `org-name:` for RIPE-style registries). Registries
//! answering over RDAP return JSON instead, so the service's parsed registrant
//! is used when no such line exists.

use crate::error_handling::WhoisError;

/// Line prefixes that carry the organization name, matched case-sensitively.
const ORG_NAME_PREFIXES: &[&str] = &["OrgName:", "org-name:"];

/// Extracts the organization name from a raw WHOIS response.
///
/// Returns the trimmed remainder of the first line starting with `OrgName:` or
/// `org-name:`.
///
/// # Errors
///
/// Returns `WhoisError::OrgNameNotFound` if no line matches.
pub fn extract_org_name(raw: &str) -> Result<String, WhoisError> {
    raw.lines()
        .find_map(|line| {
            ORG_NAME_PREFIXES
                .iter()
                .find_map(|prefix| line.strip_prefix(prefix))
        })
        .map(|rest| rest.trim().to_string())
        .ok_or(WhoisError::OrgNameNotFound)
}

/// Picks the organization from the raw response, falling back to the
/// registrant the WHOIS service parsed out of it.
///
/// # Errors
///
/// Returns `WhoisError::OrgNameNotFound` if neither source names one.
pub fn org_name_or_parsed(raw: &str, parsed_org: Option<String>) -> Result<String, WhoisError> {
    extract_org_name(raw).or_else(|err| {
        parsed_org
            .map(|org| org.trim().to_string())
            .filter(|org| !org.is_empty())
            .ok_or(err)
    })
}
