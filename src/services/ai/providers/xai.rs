use serde::Deserialize;
use serde_json::json;

use super::ChatProvider;
use crate::config::AiProviderConfig;
use crate::errors::{CampusError, Result};

// xAI 的接口与 OpenAI chat-completions 兼容
pub struct XaiProvider {
    config: AiProviderConfig,
    timeout: u64,
}

impl XaiProvider {
    pub fn new(config: AiProviderConfig, timeout: u64) -> Self {
        Self { config, timeout }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[async_trait::async_trait]
impl ChatProvider for XaiProvider {
    fn name(&self) -> &'static str {
        "xai"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        super::require_api_key(&self.config, "xai")?;
        let client = super::build_client(self.timeout)?;

        let url = format!("{}/chat/completions", self.config.base_url);
        let body = json!({
            "model": self.config.model,
            "messages": [{"role": "user", "content": prompt}],
        });

        let response = client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: ChatCompletionResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| CampusError::ai_provider("xai returned no choices"))
    }
}
