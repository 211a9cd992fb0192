use super::entities::{AiInsight, ChatMessage};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 对话响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ai.ts")]
pub struct ChatResponse {
    pub reply: String,
    pub provider: String,
    pub fallback: bool,
}

// 对话历史响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ai.ts")]
pub struct ChatHistoryResponse {
    pub items: Vec<ChatMessage>,
    pub pagination: PaginationInfo,
}

// 学情分析响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ai.ts")]
pub struct InsightResponse {
    pub insight: AiInsight,
}

// 学情分析历史响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ai.ts")]
pub struct InsightListResponse {
    pub items: Vec<AiInsight>,
    pub pagination: PaginationInfo,
}
