//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::rcode::classify;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors that end a query.
///
/// Every variant is fatal to the current invocation and is rendered as-is by
/// the output layer. The `Display` text is the user-visible message in both
/// text and JSON mode.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The requested provider is not in the registry. Raised before any network I/O.
    #[error("unknown provider: {name} (valid providers: {})", .valid.join(", "))]
    UnknownProvider {
        /// Name that was requested
        name: String,
        /// Registered provider names, sorted
        valid: Vec<String>,
    },

    /// The request URL could not be built from the provider endpoint.
    #[error("new request error: {0}")]
    RequestBuild(String),

    /// Connection, TLS or timeout failure while sending the request.
    #[error("request do error: {0}")]
    Transport(#[source] ReqwestError),

    /// Failure while buffering the response body.
    #[error("read body error: {0}")]
    ReadBody(#[source] ReqwestError),

    /// The provider answered with a non-2xx status.
    #[error("error response status: {status}, body: {body}")]
    Upstream {
        /// HTTP status line, e.g. `502 Bad Gateway`
        status: reqwest::StatusCode,
        /// Raw response body, not parsed
        body: String,
    },

    /// The 2xx body is not a valid DoH JSON envelope.
    #[error("unmarshal error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope carries a non-zero DNS response code.
    #[error("{}", rcode_message(.code))]
    Rcode {
        /// DNS response code from the `Status` field
        code: i64,
    },
}

fn rcode_message(code: &i64) -> String {
    classify(*code)
}

/// Coarse classification of a [`QueryError`], used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// Unknown provider name
    UnknownProvider,
    /// Malformed request URL
    RequestBuild,
    /// Network, TLS, timeout or body read failure
    Transport,
    /// Non-2xx HTTP response
    Upstream,
    /// Malformed DoH JSON
    Decode,
    /// Non-zero DNS response code
    Rcode,
}

impl QueryError {
    /// Returns the taxonomy bucket of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::UnknownProvider { .. } => ErrorKind::UnknownProvider,
            QueryError::RequestBuild(_) => ErrorKind::RequestBuild,
            QueryError::Transport(_) | QueryError::ReadBody(_) => ErrorKind::Transport,
            QueryError::Upstream { .. } => ErrorKind::Upstream,
            QueryError::Decode(_) => ErrorKind::Decode,
            QueryError::Rcode { .. } => ErrorKind::Rcode,
        }
    }

    /// Returns the DNS response code for [`QueryError::Rcode`], `None` otherwise.
    pub fn rcode(&self) -> Option<i64> {
        match self {
            QueryError::Rcode { code } => Some(*code),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Returns a short human-readable name for the error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnknownProvider => "unknown provider",
            ErrorKind::RequestBuild => "request build error",
            ErrorKind::Transport => "transport error",
            ErrorKind::Upstream => "upstream error",
            ErrorKind::Decode => "decode error",
            ErrorKind::Rcode => "rcode error",
        }
    }
}

/// Errors from the WHOIS adapter.
///
/// These never surface as query-level failures; the executor drops them when
/// enrichment fails.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// No `OrgName:` or `org-name:` line in the registry response.
    #[error("OrgName not found in WHOIS lookup result")]
    OrgNameNotFound,

    /// The WHOIS service could not be reached or rejected the query.
    #[error("WHOIS lookup error: {0}")]
    Lookup(String),

    /// The lookup did not finish within its deadline.
    #[error("WHOIS lookup timed out after {0:?}")]
    Timeout(std::time::Duration),
}
