//! JSON envelope rendering.

use serde::Serialize;

use crate::query::{EnrichedRecord, QueryOutcome, QueryResult};

/// Top-level JSON document: exactly one of `records` or `error` is present.
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<&'a [EnrichedRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a QueryResult> for JsonOutput<'a> {
    fn from(result: &'a QueryResult) -> Self {
        match result {
            Ok(QueryOutcome::Records(records)) => Self {
                records: Some(records.as_slice()),
                error: None,
            },
            Ok(QueryOutcome::NoRecord) => Self {
                records: Some(&[][..]),
                error: None,
            },
            Err(e) => Self {
                records: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Serializes a result as a pretty-printed JSON document (two-space indent).
pub fn to_json(result: &QueryResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput::from(result))
}
