//! Configuration types for the Switchboard LLM adapter
//!
//! Holds the caller-facing construction input (provider identifier, optional
//! API key, optional base URL override) and the credential resolution layer
//! that supplies keys from the process environment when none is configured.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod adapter;
pub mod credentials;

pub use adapter::AdapterConfig;
pub use credentials::CredentialResolver;
