//! DoH provider registry.
//!
//! Maps lowercase provider names to their JSON API endpoints. The registry is
//! an ordinary value passed to the executor, so tests can point a provider at
//! a mock server without touching process-wide state.

use std::collections::HashMap;

use crate::error_handling::QueryError;

/// Built-in providers and their DoH JSON endpoints.
pub const BUILTIN_PROVIDERS: &[(&str, &str)] = &[
    ("cloudflare", "https://cloudflare-dns.com/dns-query"),
    ("google", "https://dns.google/resolve"),
];

/// Immutable mapping from provider name to endpoint URL.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    endpoints: HashMap<String, String>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new(
            BUILTIN_PROVIDERS
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string())),
        )
    }
}

impl ProviderRegistry {
    /// Builds a registry from `(name, endpoint)` pairs. Later duplicates win.
    pub fn new<I>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            endpoints: endpoints.into_iter().collect(),
        }
    }

    /// Returns a copy of this registry with `name` mapped to `endpoint`.
    pub fn with_endpoint(mut self, name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        self.endpoints.insert(name.into(), endpoint.into());
        self
    }

    /// Resolves a provider name to its endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownProvider` listing the valid names when
    /// `name` is not registered.
    pub fn resolve(&self, name: &str) -> Result<&str, QueryError> {
        self.endpoints
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| QueryError::UnknownProvider {
                name: name.to_string(),
                valid: self.list_valid(),
            })
    }

    /// Returns every registered provider name, sorted.
    pub fn list_valid(&self) -> Vec<String> {
        let mut names: Vec<String> = self.endpoints.keys().cloned().collect();
        names.sort();
        names
    }
}
