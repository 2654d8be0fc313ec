//! Oracle providers. The engine treats the oracle as an opaque capability:
//! one prompt in, one free-text answer out. Credential and model selection
//! belong to whoever constructs the provider.

pub mod gemini;
pub mod scripted;
pub mod tracing;

use crate::model::OracleResponse;
use async_trait::async_trait;

/// Text-understanding oracle: answers a single natural-language question.
/// Potentially slow, potentially failing with a transport/quota error.
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn query(&self, prompt: &str) -> anyhow::Result<OracleResponse>;

    fn provider_name(&self) -> &'static str;
}
