use super::Oracle;
use crate::model::OracleResponse;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info_span, Instrument};

/// Decorator that wraps any oracle in a span per call, recording provider,
/// model and failures. Front ends opt in by wrapping their provider.
pub struct TracingOracle {
    inner: Arc<dyn Oracle>,
}

impl TracingOracle {
    pub fn new(inner: Arc<dyn Oracle>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Oracle for TracingOracle {
    async fn query(&self, prompt: &str) -> anyhow::Result<OracleResponse> {
        let span = info_span!(
            "oracle.query",
            "oracle.provider" = self.inner.provider_name(),
            "oracle.model" = tracing::field::Empty,
            "error" = tracing::field::Empty,
            "error.message" = tracing::field::Empty,
        );

        async move {
            let result = self.inner.query(prompt).await;
            let span = tracing::Span::current();
            match &result {
                Ok(resp) => {
                    span.record("oracle.model", resp.model.as_str());
                }
                Err(e) => {
                    span.record("error", true);
                    span.record("error.message", e.to_string().as_str());
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::oracle::scripted::ScriptedOracle;

    #[tokio::test]
    async fn passes_responses_and_errors_through() {
        let inner = Arc::new(ScriptedOracle::answering(["True"]));
        let oracle = TracingOracle::new(inner.clone());

        let resp = oracle.query("q").await.unwrap();
        assert_eq!(resp.text, "True");
        assert_eq!(oracle.provider_name(), "scripted");

        let err = oracle.query("q2").await.unwrap_err();
        assert!(err.to_string().contains("exhausted"));
    }
}
