//! DoH request/response cycle.
//!
//! One invocation performs exactly one HTTP request, then interprets the
//! envelope in a fixed order: HTTP status, JSON decoding, DNS response code,
//! answer presence. WHOIS enrichment runs sequentially per eligible record.

use reqwest::header::ACCEPT;
use url::Url;

use crate::config::{is_ip_record_type, DNS_JSON_MEDIA_TYPE};
use crate::error_handling::QueryError;
use crate::initialization::init_client;
use crate::provider::ProviderRegistry;
use crate::whois::{WhoisClient, WhoisLookup};

use super::types::{AnswerRecord, DohResponse, EnrichedRecord, QueryOutcome, QueryResult};

/// Executes DoH queries against the providers of a [`ProviderRegistry`].
pub struct QueryExecutor<W = WhoisClient> {
    client: reqwest::Client,
    registry: ProviderRegistry,
    whois: W,
}

impl QueryExecutor<WhoisClient> {
    /// Creates an executor with the default HTTP client (10 second deadline)
    /// and the port-43 WHOIS client.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(registry: ProviderRegistry) -> Result<Self, reqwest::Error> {
        Ok(Self::with_parts(init_client()?, registry, WhoisClient::new()))
    }
}

impl<W: WhoisLookup> QueryExecutor<W> {
    /// Creates an executor from explicit parts.
    pub fn with_parts(client: reqwest::Client, registry: ProviderRegistry, whois: W) -> Self {
        Self {
            client,
            registry,
            whois,
        }
    }

    /// Resolves `domain` for `query_type` through `provider`.
    ///
    /// # Arguments
    ///
    /// * `query_type` - RR type token passed through to the provider (`A`, `MX`, `28`, ...)
    /// * `domain` - Name to resolve, passed through unvalidated
    /// * `enable_whois` - Look up the organization of every A/AAAA answer
    /// * `provider` - Registry key of the DoH provider
    ///
    /// # Returns
    ///
    /// `QueryOutcome::Records` when the answer section is present (possibly
    /// empty), `QueryOutcome::NoRecord` when it is absent, or a `QueryError`.
    /// A non-zero DNS response code is an error even if answers are present.
    pub async fn execute(
        &self,
        query_type: &str,
        domain: &str,
        enable_whois: bool,
        provider: &str,
    ) -> QueryResult {
        let result = self
            .run(query_type, domain, enable_whois, provider)
            .await;
        if let Err(e) = &result {
            log::debug!("{query_type} query for {domain} failed ({}): {e}", e.kind());
        }
        result
    }

    async fn run(
        &self,
        query_type: &str,
        domain: &str,
        enable_whois: bool,
        provider: &str,
    ) -> QueryResult {
        let endpoint = self.registry.resolve(provider)?;
        let url = build_query_url(endpoint, domain, query_type)?;
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, DNS_JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(QueryError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(QueryError::ReadBody)?;
        log::debug!("{provider} responded with {status} ({} bytes)", body.len());

        if !status.is_success() {
            return Err(QueryError::Upstream {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let envelope: DohResponse = serde_json::from_slice(&body)?;
        log::trace!(
            "envelope flags: TC={} RD={} RA={} AD={} CD={}",
            envelope.truncated,
            envelope.recursion_desired,
            envelope.recursion_available,
            envelope.authenticated_data,
            envelope.checking_disabled
        );

        match answers_of(envelope)? {
            Some(answers) => Ok(QueryOutcome::Records(
                self.enrich(answers, enable_whois).await,
            )),
            None => Ok(QueryOutcome::NoRecord),
        }
    }

    /// Converts answers to enriched records, keeping their order.
    async fn enrich(&self, answers: Vec<AnswerRecord>, enable_whois: bool) -> Vec<EnrichedRecord> {
        let mut records = Vec::with_capacity(answers.len());
        for answer in answers {
            let whois = if enable_whois && is_ip_record_type(answer.rr_type) {
                self.lookup_org(&answer.data).await
            } else {
                None
            };
            records.push(EnrichedRecord::new(answer, whois));
        }
        records
    }

    /// WHOIS is best-effort: this is the one place its errors are dropped.
    async fn lookup_org(&self, address: &str) -> Option<String> {
        match self.whois.lookup(address).await {
            Ok(org) if !org.is_empty() => Some(org),
            Ok(_) => None,
            Err(e) => {
                log::debug!("WHOIS enrichment skipped for {address}: {e}");
                None
            }
        }
    }
}

/// Appends `?name=<domain>&type=<query_type>` to the provider endpoint.
///
/// # Errors
///
/// Returns `QueryError::RequestBuild` if the result is not a valid absolute URL.
pub fn build_query_url(endpoint: &str, domain: &str, query_type: &str) -> Result<Url, QueryError> {
    Url::parse(&format!("{endpoint}?name={domain}&type={query_type}"))
        .map_err(|e| QueryError::RequestBuild(format!("{e}: {endpoint}")))
}

/// Applies the response-code policy: a non-zero status wins over any answers.
fn answers_of(envelope: DohResponse) -> Result<Option<Vec<AnswerRecord>>, QueryError> {
    if envelope.status != 0 {
        return Err(QueryError::Rcode {
            code: envelope.status,
        });
    }
    Ok(envelope.answer)
}
