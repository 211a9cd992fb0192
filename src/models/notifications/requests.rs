use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 通知列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    /// 只看未读
    pub unread_only: Option<bool>,
}
