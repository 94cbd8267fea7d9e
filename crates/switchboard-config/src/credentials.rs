//! Credential resolution for provider API keys
//!
//! Key lookup is injected at construction time rather than read from ambient
//! process state inside business logic, so the translation core stays
//! testable without environment mutation.

use std::sync::Arc;

use secrecy::SecretString;

/// Lookup function mapping an environment variable name to a value
type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves provider credentials from an injected source
#[derive(Clone)]
pub struct CredentialResolver {
    lookup: Lookup,
}

impl std::fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialResolver").finish_non_exhaustive()
    }
}

impl CredentialResolver {
    /// Resolver backed by the process environment
    pub fn from_env() -> Self {
        Self {
            lookup: Arc::new(|var| std::env::var(var).ok()),
        }
    }

    /// Resolver backed by a custom lookup function
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Resolver that never finds a credential
    pub fn empty() -> Self {
        Self::with_lookup(|_| None)
    }

    /// Look up a credential by its environment variable name
    ///
    /// Empty values are treated as unset.
    pub fn resolve(&self, var: &str) -> Option<SecretString> {
        (self.lookup)(var)
            .filter(|value| !value.is_empty())
            .map(SecretString::from)
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn env_resolver_reads_variable() {
        temp_env::with_var("SWITCHBOARD_TEST_KEY", Some("sk-env"), || {
            let resolver = CredentialResolver::from_env();
            let key = resolver.resolve("SWITCHBOARD_TEST_KEY").unwrap();
            assert_eq!(key.expose_secret(), "sk-env");
        });
    }

    #[test]
    fn env_resolver_misses_unset_variable() {
        temp_env::with_var_unset("SWITCHBOARD_UNSET_KEY", || {
            let resolver = CredentialResolver::from_env();
            assert!(resolver.resolve("SWITCHBOARD_UNSET_KEY").is_none());
        });
    }

    #[test]
    fn empty_value_treated_as_unset() {
        let resolver = CredentialResolver::with_lookup(|_| Some(String::new()));
        assert!(resolver.resolve("ANY").is_none());
    }

    #[test]
    fn custom_lookup_is_consulted() {
        let resolver = CredentialResolver::with_lookup(|var| {
            (var == "ANTHROPIC_API_KEY").then(|| "sk-custom".to_owned())
        });
        assert!(resolver.resolve("OTHER").is_none());
        let key = resolver.resolve("ANTHROPIC_API_KEY").unwrap();
        assert_eq!(key.expose_secret(), "sk-custom");
    }
}
