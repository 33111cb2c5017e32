//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_PROVIDER;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line configuration for a single query.
///
/// Can also be constructed programmatically through `Default`:
///
/// ```no_run
/// use doh::Config;
///
/// let config = Config {
///     query_type: "AAAA".to_string(),
///     domain: "example.com".to_string(),
///     json: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "doh",
    version,
    about = "Simple DNS over HTTPS cli client",
    override_usage = "doh [OPTIONS] <QUERY_TYPE> <DOMAIN>"
)]
pub struct Config {
    /// DNS record type to query (A, AAAA, MX, TXT, ... or a numeric type)
    pub query_type: String,

    /// Domain name to resolve
    pub domain: String,

    /// DoH provider to query (cloudflare, google)
    #[arg(short, long, env = "DOH_PROVIDER", default_value = DEFAULT_PROVIDER)]
    pub provider: String,

    /// Look up the owning organization of A/AAAA answers via WHOIS
    #[arg(short, long, env = "DOH_WHOIS")]
    pub whois: bool,

    /// Print the result as JSON instead of colored text
    #[arg(short, long, env = "DOH_JSON")]
    pub json: bool,

    /// Log level
    #[arg(long, value_enum, env = "DOH_LOG_LEVEL", default_value = "warn")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query_type: "A".to_string(),
            domain: String::new(),
            provider: DEFAULT_PROVIDER.to_string(),
            whois: false,
            json: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
