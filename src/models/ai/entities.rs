use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 对话记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ai.ts")]
pub struct ChatMessage {
    pub id: i64,
    pub user_id: i64,
    pub provider: String,
    pub prompt: String,
    pub response: String,
    /// 上游不可用时使用了兜底文案
    pub fallback: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 学情分析结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ai.ts")]
pub struct AiInsight {
    pub id: i64,
    pub student_id: i64,
    pub analysis_type: String,
    pub provider: String,
    pub content: String,
    pub fallback: bool,
    pub requested_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
