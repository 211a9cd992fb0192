use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 文档列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/document.ts")]
pub struct DocumentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<String>,
    pub owner_id: Option<i64>,
}
