use super::entities::FeeStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 缴费单列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub semester: Option<i32>,
    pub status: Option<FeeStatus>,
    /// 只看逾期未缴清的
    pub overdue: Option<bool>,
}

// 开具缴费单请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct CreateFeeRequest {
    pub student_id: i64,
    pub semester: i32,
    pub description: String,
    pub amount_due: f64,
    pub due_date: chrono::DateTime<chrono::Utc>,
}

// 缴费请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct PayFeeRequest {
    pub amount: f64,
}
