/*!
 * LLM 提供商封装
 *
 * openai / xai 走 chat-completions 接口，gemini 走 generateContent。
 * 上层只依赖 ChatProvider trait，不关心各家报文差异。
 */

pub mod gemini;
pub mod openai;
pub mod xai;

use std::time::Duration;

use crate::config::{AiProviderConfig, AppConfig};
use crate::errors::{CampusError, Result};

#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// 按名字解析提供商，名字非法时报错而不是静默换默认
pub fn resolve(name: &str) -> Result<Box<dyn ChatProvider>> {
    let config = AppConfig::get();
    match name {
        "openai" => Ok(Box::new(openai::OpenAiProvider::new(
            config.ai.openai.clone(),
            config.ai.timeout,
        ))),
        "gemini" => Ok(Box::new(gemini::GeminiProvider::new(
            config.ai.gemini.clone(),
            config.ai.timeout,
        ))),
        "xai" => Ok(Box::new(xai::XaiProvider::new(
            config.ai.xai.clone(),
            config.ai.timeout,
        ))),
        other => Err(CampusError::ai_provider(format!(
            "Unknown AI provider: {other}"
        ))),
    }
}

pub(super) fn build_client(timeout: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()
        .map_err(CampusError::from)
}

pub(super) fn require_api_key(config: &AiProviderConfig, provider: &str) -> Result<()> {
    if config.api_key.is_empty() {
        return Err(CampusError::ai_provider(format!(
            "No API key configured for {provider}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rejects_unknown_provider() {
        assert!(resolve("claude-shannon").is_err());
    }
}
