//! Error handling.
//!
//! This module provides the error types for every layer:
//! - `QueryError`: fatal query failures, rendered to the user
//! - `WhoisError`: enrichment failures, never escalated
//! - `InitializationError`: logger setup failures
//!
//! `ErrorKind` groups `QueryError` variants into the buckets used for logging.

mod types;

// Re-export public API
pub use types::{ErrorKind, InitializationError, QueryError, WhoisError};
