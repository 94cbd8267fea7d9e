//! Provider registry: maps provider identifiers to adapter constructors
//!
//! The registry is the single dispatch point for provider construction.
//! Adding a provider means one `Provider` implementation plus one arm here.
//! Unrecognized identifiers fail synchronously at construction time, never
//! at first call.

use std::sync::Arc;

use secrecy::SecretString;
use switchboard_config::{AdapterConfig, CredentialResolver};

use crate::error::AdapterError;
use crate::provider::Provider;
use crate::provider::anthropic::{API_KEY_ENV_VAR, AnthropicProvider};

/// Recognized provider backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Anthropic Messages API
    Anthropic,
}

impl ProviderKind {
    /// Parse a provider identifier, failing with the offending name
    pub fn parse(provider: &str) -> Result<Self, AdapterError> {
        match provider {
            "anthropic" => Ok(Self::Anthropic),
            other => Err(AdapterError::UnsupportedProvider {
                provider: other.to_owned(),
            }),
        }
    }

    /// Environment variable consulted for this provider's credential fallback
    pub const fn api_key_env_var(self) -> &'static str {
        match self {
            Self::Anthropic => API_KEY_ENV_VAR,
        }
    }
}

/// Identifiers the registry recognizes
pub fn supported() -> &'static [&'static str] {
    &["anthropic"]
}

/// Construct the provider named by the config
///
/// Credential precedence: explicit `api_key` in the config, then the
/// provider's well-known environment variable via the injected resolver.
pub fn build_provider(
    config: &AdapterConfig,
    credentials: &CredentialResolver,
) -> Result<Arc<dyn Provider>, AdapterError> {
    let kind = ProviderKind::parse(&config.provider)?;

    let api_key: SecretString = config
        .api_key
        .clone()
        .or_else(|| credentials.resolve(kind.api_key_env_var()))
        .ok_or_else(|| AdapterError::MissingApiKey {
            provider: config.provider.clone(),
        })?;

    let provider: Arc<dyn Provider> = match kind {
        ProviderKind::Anthropic => Arc::new(AnthropicProvider::new(
            config.provider.clone(),
            api_key,
            config.base_url.clone(),
        )),
    };

    Ok(provider)
}
