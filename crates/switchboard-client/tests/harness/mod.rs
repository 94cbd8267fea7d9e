//! Shared test harness for client integration tests

pub mod mock_anthropic;
