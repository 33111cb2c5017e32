//! End-to-end tests: execute a query against a mock DoH provider and render it.

use doh::error_handling::WhoisError;
use doh::{
    exit_code, render, ErrorKind, OutputFormat, ProviderRegistry, QueryExecutor, QueryOutcome,
    QueryResult, WhoisLookup,
};
use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::Value;

/// WHOIS source that always fails, so no test touches the network.
struct NoWhois;

impl WhoisLookup for NoWhois {
    async fn lookup(&self, _query: &str) -> Result<String, WhoisError> {
        Err(WhoisError::Lookup("disabled in tests".to_string()))
    }
}

/// WHOIS source with a fixed answer.
struct FixedWhois(&'static str);

impl WhoisLookup for FixedWhois {
    async fn lookup(&self, _query: &str) -> Result<String, WhoisError> {
        Ok(self.0.to_string())
    }
}

fn mock_provider(status: u16, body: &'static str) -> Server {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/resolve"))
            .respond_with(status_code(status).body(body)),
    );
    server
}

async fn query<W: WhoisLookup>(server: &Server, whois: W, enable_whois: bool) -> QueryResult {
    let registry =
        ProviderRegistry::default().with_endpoint("mock", server.url("/resolve").to_string());
    let executor =
        QueryExecutor::with_parts(doh::initialization::init_client().unwrap(), registry, whois);
    executor
        .execute("A", "example.com", enable_whois, "mock")
        .await
}

fn rendered(result: &QueryResult, format: OutputFormat) -> (String, String) {
    colored::control::set_override(false);
    let mut out = Vec::new();
    let mut err = Vec::new();
    render(result, format, &mut out, &mut err).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[tokio::test]
async fn test_a_record_text_and_json() {
    let server = mock_provider(
        200,
        r#"{"Status":0,"Answer":[{"name":"example.com.","type":1,"TTL":120,"data":"93.184.216.34"}]}"#,
    );
    let result = query(&server, NoWhois, false).await;
    assert_eq!(exit_code(&result, OutputFormat::Text), 0);

    let (text, _) = rendered(&result, OutputFormat::Text);
    for line in [
        "name: example.com.",
        "type: 1",
        "ttl: 120",
        "data: 93.184.216.34",
    ] {
        assert!(text.lines().any(|l| l == line), "missing line {line:?} in {text:?}");
    }
    assert!(!text.contains("whois"));

    let (json, _) = rendered(&result, OutputFormat::Json);
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "records": [{
                "name": "example.com.",
                "type": 1,
                "ttl": 120,
                "data": "93.184.216.34"
            }]
        })
    );
}

#[tokio::test]
async fn test_a_record_with_whois_enrichment() {
    let server = mock_provider(
        200,
        r#"{"Status":0,"Answer":[{"name":"example.com.","type":1,"TTL":120,"data":"93.184.216.34"}]}"#,
    );
    let result = query(&server, FixedWhois("Edgecast Inc."), true).await;

    let (text, _) = rendered(&result, OutputFormat::Text);
    assert!(text.lines().any(|l| l == "whois: Edgecast Inc."));

    let (json, _) = rendered(&result, OutputFormat::Json);
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["records"][0]["whois"], "Edgecast Inc.");
}

#[tokio::test]
async fn test_no_answer_renders_no_record() {
    let server = mock_provider(200, r#"{"Status":0}"#);
    let result = query(&server, NoWhois, false).await;
    assert_eq!(result.as_ref().unwrap(), &QueryOutcome::NoRecord);
    assert_eq!(exit_code(&result, OutputFormat::Text), 0);

    let (text, err) = rendered(&result, OutputFormat::Text);
    assert_eq!(text.trim_end(), "There is no such DNS record");
    assert!(err.is_empty());

    let (json, _) = rendered(&result, OutputFormat::Json);
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({ "records": [] }));
}

#[tokio::test]
async fn test_rcode_error_in_both_modes() {
    let server = mock_provider(200, r#"{"Status":3}"#);
    let result = query(&server, NoWhois, false).await;
    assert_eq!(result.as_ref().unwrap_err().rcode(), Some(3));
    assert_eq!(exit_code(&result, OutputFormat::Text), 1);
    assert_eq!(exit_code(&result, OutputFormat::Json), 0);

    let (text, err) = rendered(&result, OutputFormat::Text);
    assert!(text.is_empty());
    assert_eq!(err, "error: NXDomain: Non-Existent Domain (rcode: 3)\n");

    let (json, err) = rendered(&result, OutputFormat::Json);
    assert!(err.is_empty(), "JSON mode must not print a second error line");
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "error": "NXDomain: Non-Existent Domain (rcode: 3)" })
    );
}

#[tokio::test]
async fn test_upstream_failure_renders_error() {
    let server = mock_provider(502, "upstream failure");
    let result = query(&server, NoWhois, false).await;
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(err.to_string().contains("error response status"));

    let (json, _) = rendered(&result, OutputFormat::Json);
    let value: Value = serde_json::from_str(&json).unwrap();
    assert!(value["error"]
        .as_str()
        .unwrap()
        .contains("upstream failure"));
}

#[tokio::test]
async fn test_malformed_json_renders_decode_error() {
    let server = mock_provider(200, "{");
    let result = query(&server, NoWhois, false).await;
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("unmarshal"));
}

#[tokio::test]
async fn test_unknown_provider_via_default_entry_point() {
    let result = doh::execute("A", "example.com", false, "unknown-provider").await;
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownProvider);
    assert!(err.to_string().contains("unknown provider: unknown-provider"));

    let (json, _) = rendered(&result, OutputFormat::Json);
    assert!(json.contains("unknown provider: unknown-provider"));
}
