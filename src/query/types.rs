//! DoH JSON envelope and query result types.

use serde::{Deserialize, Serialize};

use crate::error_handling::QueryError;

/// Decoded DoH JSON response.
///
/// Field names follow the provider's JSON API (`Status`, `Answer`, ...);
/// lowercase spellings are accepted as aliases. `answer` is `None` when the key
/// is absent (or `null`) and `Some(vec![])` when it is an empty array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DohResponse {
    /// DNS response code
    #[serde(rename = "Status", alias = "status", default)]
    pub status: i64,
    /// Truncated bit
    #[serde(rename = "TC", alias = "tc", default)]
    pub truncated: bool,
    /// Recursion desired bit
    #[serde(rename = "RD", alias = "rd", default)]
    pub recursion_desired: bool,
    /// Recursion available bit
    #[serde(rename = "RA", alias = "ra", default)]
    pub recursion_available: bool,
    /// DNSSEC authenticated-data bit
    #[serde(rename = "AD", alias = "ad", default)]
    pub authenticated_data: bool,
    /// DNSSEC checking-disabled bit
    #[serde(rename = "CD", alias = "cd", default)]
    pub checking_disabled: bool,
    /// Echoed question section
    #[serde(rename = "Question", alias = "question", default)]
    pub question: Vec<Question>,
    /// Answer section
    #[serde(rename = "Answer", alias = "answer", default)]
    pub answer: Option<Vec<AnswerRecord>>,
}

/// One entry of the echoed question section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Question {
    /// Queried name
    #[serde(default)]
    pub name: String,
    /// Queried RR type
    #[serde(rename = "type", default)]
    pub rr_type: i64,
}

/// One resource record from the answer section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnswerRecord {
    /// Owner name
    #[serde(default)]
    pub name: String,
    /// DNS RR type (1 = A, 28 = AAAA, ...)
    #[serde(rename = "type", default)]
    pub rr_type: i64,
    /// Time to live in seconds
    #[serde(rename = "TTL", alias = "ttl", default)]
    pub ttl: i64,
    /// Type-specific record data
    #[serde(default)]
    pub data: String,
}

/// An answer record plus the optional WHOIS organization of its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    /// Owner name
    pub name: String,
    /// DNS RR type
    #[serde(rename = "type")]
    pub rr_type: i64,
    /// Time to live in seconds
    pub ttl: i64,
    /// Type-specific record data
    pub data: String,
    /// Organization owning the address, only for enriched A/AAAA records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois: Option<String>,
}

impl EnrichedRecord {
    /// Wraps an answer record with an optional WHOIS organization.
    pub fn new(record: AnswerRecord, whois: Option<String>) -> Self {
        Self {
            name: record.name,
            rr_type: record.rr_type,
            ttl: record.ttl,
            data: record.data,
            whois,
        }
    }
}

impl From<AnswerRecord> for EnrichedRecord {
    fn from(record: AnswerRecord) -> Self {
        Self::new(record, None)
    }
}

/// Successful outcome of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The answer section was present; records keep the provider's order and may be empty.
    Records(Vec<EnrichedRecord>),
    /// The answer section was absent.
    NoRecord,
}

/// The single value handed from the executor to the renderer.
pub type QueryResult = Result<QueryOutcome, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_status_only() {
        let envelope: DohResponse = serde_json::from_str(r#"{"Status":3}"#).unwrap();
        assert_eq!(envelope.status, 3);
        assert!(envelope.answer.is_none());
    }

    #[test]
    fn test_decode_missing_status_defaults_to_zero() {
        let envelope: DohResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.status, 0);
        assert!(envelope.answer.is_none());
    }

    #[test]
    fn test_decode_absent_vs_empty_answer() {
        let absent: DohResponse = serde_json::from_str(r#"{"Status":0}"#).unwrap();
        let null: DohResponse = serde_json::from_str(r#"{"Status":0,"Answer":null}"#).unwrap();
        let empty: DohResponse = serde_json::from_str(r#"{"Status":0,"Answer":[]}"#).unwrap();
        assert_eq!(absent.answer, None);
        assert_eq!(null.answer, None);
        assert_eq!(empty.answer, Some(vec![]));
    }

    #[test]
    fn test_decode_full_cloudflare_response() {
        let body = r#"{
            "Status": 0, "TC": false, "RD": true, "RA": true, "AD": true, "CD": false,
            "Question": [{"name": "example.com", "type": 1}],
            "Answer": [
                {"name": "example.com", "type": 1, "TTL": 120, "data": "93.184.216.34"},
                {"name": "example.com", "type": 1, "TTL": 120, "data": "93.184.216.35"}
            ]
        }"#;
        let envelope: DohResponse = serde_json::from_str(body).unwrap();
        assert!(envelope.recursion_desired);
        assert!(envelope.authenticated_data);
        assert!(!envelope.truncated);
        assert_eq!(envelope.question.len(), 1);
        assert_eq!(envelope.question[0].rr_type, 1);
        let answer = envelope.answer.unwrap();
        assert_eq!(answer.len(), 2);
        assert_eq!(answer[1].data, "93.184.216.35");
        assert_eq!(answer[0].ttl, 120);
    }

    #[test]
    fn test_decode_lowercase_aliases() {
        let body = r#"{"status":0,"answer":[{"name":"a.","type":28,"ttl":60,"data":"::1"}]}"#;
        let envelope: DohResponse = serde_json::from_str(body).unwrap();
        let answer = envelope.answer.unwrap();
        assert_eq!(answer[0].rr_type, 28);
        assert_eq!(answer[0].ttl, 60);
    }

    #[test]
    fn test_decode_out_of_range_integers() {
        let body = r#"{"Status":0,"Answer":[{"name":"a.","type":70000,"TTL":-1,"data":"x"}]}"#;
        let envelope: DohResponse = serde_json::from_str(body).unwrap();
        let answer = envelope.answer.unwrap();
        assert_eq!(answer[0].rr_type, 70000);
        assert_eq!(answer[0].ttl, -1);
    }

    #[test]
    fn test_decode_malformed() {
        assert!(serde_json::from_str::<DohResponse>("{").is_err());
        assert!(serde_json::from_str::<DohResponse>(r#"{"Status":"zero"}"#).is_err());
    }

    #[test]
    fn test_enriched_record_serialization_omits_missing_whois() {
        let record = EnrichedRecord::from(AnswerRecord {
            name: "example.com.".to_string(),
            rr_type: 1,
            ttl: 120,
            data: "93.184.216.34".to_string(),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], 1);
        assert_eq!(value["ttl"], 120);
        assert!(value.get("whois").is_none());

        let enriched = EnrichedRecord {
            whois: Some("Edgecast Inc.".to_string()),
            ..record
        };
        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["whois"], "Edgecast Inc.");
    }
}
