use super::Oracle;
use crate::model::OracleResponse;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted turn of a [`ScriptedOracle`].
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Answer(String),
    /// Simulated transport failure (network, quota, timeout).
    Fail(String),
}

/// Deterministic oracle double for tests: replies are consumed in call
/// order, every received prompt is recorded. A call past the end of the
/// script is an error, so over-calling engines fail loudly.
#[derive(Default)]
pub struct ScriptedOracle {
    replies: Mutex<VecDeque<ScriptedReply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedOracle {
    pub fn new(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Script of plain answers, no failures.
    pub fn answering<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            answers
                .into_iter()
                .map(|a| ScriptedReply::Answer(a.into())),
        )
    }

    /// Prompts received so far, in call order.
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().expect("prompts lock").len()
    }
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn query(&self, prompt: &str) -> anyhow::Result<OracleResponse> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());

        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("scripted oracle exhausted"))?;

        match reply {
            ScriptedReply::Answer(text) => Ok(OracleResponse {
                text,
                provider: "scripted".to_string(),
                model: "scripted".to_string(),
                meta: serde_json::Value::Null,
            }),
            ScriptedReply::Fail(msg) => Err(anyhow::anyhow!(msg)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
