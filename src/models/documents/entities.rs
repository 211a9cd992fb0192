use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 文档元数据
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/document.ts")]
pub struct Document {
    pub id: i64,
    pub owner_id: i64,
    /// 下载用的不透明令牌
    pub file_token: String,
    pub file_name: String,
    pub file_size: i64,
    pub content_type: String,
    pub category: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
