use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 对话请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ai.ts")]
pub struct ChatRequest {
    pub message: String,
    /// 不指定则使用配置的默认提供商
    pub provider: Option<String>,
}

// 对话历史查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ai.ts")]
pub struct ChatHistoryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
}

// 学情分析请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ai.ts")]
pub struct InsightRequest {
    /// 以路径参数为准，请求体可省略
    #[serde(default)]
    pub student_id: i64,
    /// performance | attendance
    pub analysis_type: String,
    pub provider: Option<String>,
}

// 学情分析历史查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ai.ts")]
pub struct InsightListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
}
