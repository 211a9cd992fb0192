use super::entities::Fee;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 缴费单 + 逾期标记
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub fee: Fee,
    pub overdue: bool,
}

// 缴费单响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeResponse {
    pub fee: FeeView,
}

// 缴费单列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeListResponse {
    pub items: Vec<FeeView>,
    pub pagination: PaginationInfo,
}

// 学生缴费汇总响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeSummaryResponse {
    pub student_id: i64,
    pub total_due: f64,
    pub total_paid: f64,
    pub balance: f64,
    pub overdue_count: i64,
    pub items: Vec<FeeView>,
}
