//! Proxy configuration.

use crate::adapters::alphavantage::DEFAULT_BASE_URL;

/// Environment variable holding the upstream API key.
pub const DEFAULT_API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

/// Upstream timeout applied when none is configured.
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5_000;

/// Where the upstream API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Read the named variable on every request.
    Env { var: String },
    /// Fixed value supplied by the embedder.
    Static(Option<String>),
}

impl CredentialSource {
    pub fn env(var: impl Into<String>) -> Self {
        Self::Env { var: var.into() }
    }

    pub fn fixed(key: impl Into<String>) -> Self {
        Self::Static(Some(key.into()))
    }

    pub const fn missing() -> Self {
        Self::Static(None)
    }

    /// Current key, if one is configured and non-empty.
    pub fn resolve(&self) -> Option<String> {
        let key = match self {
            Self::Env { var } => std::env::var(var).ok(),
            Self::Static(key) => key.clone(),
        };
        key.filter(|value| !value.is_empty())
    }
}

impl Default for CredentialSource {
    fn default() -> Self {
        Self::env(DEFAULT_API_KEY_ENV)
    }
}

/// Settings for the quote fetch proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub upstream_url: String,
    pub timeout_ms: u64,
    pub credentials: CredentialSource,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            upstream_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_UPSTREAM_TIMEOUT_MS,
            credentials: CredentialSource::default(),
        }
    }
}

impl ProxyConfig {
    pub fn with_upstream_url(mut self, upstream_url: impl Into<String>) -> Self {
        self.upstream_url = upstream_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_credentials(mut self, credentials: CredentialSource) -> Self {
        self.credentials = credentials;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_static_key_counts_as_missing() {
        assert_eq!(CredentialSource::Static(Some(String::new())).resolve(), None);
        assert_eq!(
            CredentialSource::Static(Some(String::from("  "))).resolve().as_deref(),
            Some("  ")
        );
        assert_eq!(CredentialSource::missing().resolve(), None);
        assert_eq!(
            CredentialSource::fixed("demo").resolve().as_deref(),
            Some("demo")
        );
    }

    #[test]
    fn unset_env_var_resolves_to_none() {
        let source = CredentialSource::env("STOCKVIEW_TEST_UNSET_KEY_4F2A");
        assert_eq!(source.resolve(), None);
    }

    #[test]
    fn default_reads_alpha_vantage_variable() {
        assert_eq!(
            ProxyConfig::default().credentials,
            CredentialSource::Env {
                var: String::from("ALPHA_VANTAGE_API_KEY")
            }
        );
    }
}
