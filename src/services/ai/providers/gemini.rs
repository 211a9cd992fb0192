use serde::Deserialize;
use serde_json::json;

use super::ChatProvider;
use crate::config::AiProviderConfig;
use crate::errors::{CampusError, Result};

// Gemini 走 generateContent，API key 放查询参数
pub struct GeminiProvider {
    config: AiProviderConfig,
    timeout: u64,
}

impl GeminiProvider {
    pub fn new(config: AiProviderConfig, timeout: u64) -> Self {
        Self { config, timeout }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: String,
}

#[async_trait::async_trait]
impl ChatProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        super::require_api_key(&self.config, "gemini")?;
        let client = super::build_client(self.timeout)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
        });

        let response = client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: GenerateContentResponse = response.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| CampusError::ai_provider("gemini returned no candidates"))
    }
}
