pub mod chat;
pub mod history;
pub mod insight;
pub mod providers;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::ai::requests::{ChatHistoryParams, ChatRequest, InsightListParams, InsightRequest};
use crate::storage::Storage;

pub struct AiService {
    storage: Option<Arc<dyn Storage>>,
}

impl AiService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // AI 对话
    pub async fn chat(
        &self,
        chat_data: ChatRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        chat::chat(self, chat_data, request).await
    }

    // 对话历史
    pub async fn chat_history(
        &self,
        query: ChatHistoryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        history::chat_history(self, query, request).await
    }

    // 生成学情分析
    pub async fn generate_insight(
        &self,
        insight_data: InsightRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        insight::generate_insight(self, insight_data, request).await
    }

    // 学情分析历史
    pub async fn list_insights(
        &self,
        student_id: i64,
        query: InsightListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        insight::list_insights(self, student_id, query, request).await
    }
}

/// 请求里没指定提供商时用配置的默认值
pub(crate) fn provider_name(requested: &Option<String>) -> String {
    requested
        .clone()
        .unwrap_or_else(|| AppConfig::get().ai.default_provider.clone())
}
