use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Construction input for an adapter client
///
/// The provider identifier is an open string validated by the provider
/// registry at construction time, not here.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    /// Provider identifier (e.g. "anthropic")
    pub provider: String,
    /// API key for authentication
    ///
    /// Falls back to the provider's well-known environment variable when
    /// absent.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for the provider endpoint
    #[serde(default)]
    pub base_url: Option<Url>,
}

impl AdapterConfig {
    /// Create a config for the given provider with no explicit key
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            api_key: None,
            base_url: None,
        }
    }

    /// Set an explicit API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Override the provider base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }
}
