use super::Oracle;
use crate::model::OracleResponse;
use async_trait::async_trait;
use serde_json::json;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Google Generative Language API client, the provider the screening system
/// was built against.
pub struct GeminiOracle {
    pub model: String,
    pub temperature: f32,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiOracle {
    pub fn new(model: String, api_key: String, temperature: f32) -> Self {
        Self {
            model,
            temperature,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Oracle for GeminiOracle {
    async fn query(&self, prompt: &str) -> anyhow::Result<OracleResponse> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);

        let body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": self.temperature,
            },
        });

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            anyhow::bail!("Gemini API error (status {}): {}", status, error_text);
        }

        let json: serde_json::Value = resp.json().await?;

        // Parse candidates[0].content.parts[0].text
        let text = json
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Gemini API response missing candidate text"))?
            .to_string();

        Ok(OracleResponse {
            text,
            provider: "gemini".to_string(),
            model: self.model.clone(),
            meta: json!({}),
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
