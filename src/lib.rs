//! doh library: DNS-over-HTTPS lookups with optional WHOIS enrichment
//!
//! This library queries a DoH provider's JSON API, classifies the response
//! against the IANA RCODE registry, optionally looks up the organization behind
//! every A/AAAA answer, and renders the result as colored text or JSON.
//!
//! # Example
//!
//! ```no_run
//! use doh::{execute, render, OutputFormat};
//!
//! # #[tokio::main]
//! # async fn main() -> std::io::Result<()> {
//! let result = execute("A", "example.com", false, "cloudflare").await;
//! render(
//!     &result,
//!     OutputFormat::Json,
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Query execution is async and requires a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod output;
pub mod provider;
pub mod query;
pub mod rcode;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ErrorKind, QueryError, WhoisError};
pub use output::{exit_code, render, OutputFormat};
pub use provider::ProviderRegistry;
pub use query::{execute, EnrichedRecord, QueryExecutor, QueryOutcome, QueryResult};
pub use rcode::classify;
pub use run::run;
pub use whois::{WhoisClient, WhoisLookup};

// Internal run module (wires a parsed configuration to the executor and renderer)
mod run {
    use std::io::{self, Write};

    use anyhow::{Context, Result};

    use crate::config::Config;
    use crate::output::{exit_code, render, OutputFormat};
    use crate::provider::ProviderRegistry;
    use crate::query::QueryExecutor;

    /// Runs one query described by `config` and renders it to stdout/stderr.
    ///
    /// # Returns
    ///
    /// The process exit code: 1 when a text-mode error was written to stderr,
    /// otherwise 0. In JSON mode a failure is reported only through the JSON
    /// document.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the output
    /// cannot be written.
    pub async fn run(config: &Config) -> Result<i32> {
        let executor = QueryExecutor::new(ProviderRegistry::default())
            .context("Failed to initialize HTTP client")?;

        let result = executor
            .execute(
                &config.query_type,
                &config.domain,
                config.whois,
                &config.provider,
            )
            .await;

        let stdout = io::stdout();
        let stderr = io::stderr();
        let mut out = stdout.lock();
        let mut err = stderr.lock();
        let format = OutputFormat::from_json_flag(config.json);
        render(&result, format, &mut out, &mut err).context("Failed to write output")?;
        out.flush().context("Failed to write output")?;

        Ok(exit_code(&result, format))
    }
}
