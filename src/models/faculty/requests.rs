use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 教职工列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub department: Option<String>,
    pub search: Option<String>,
}

// 教职工档案创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct CreateFacultyRequest {
    pub user_id: i64,
    pub employee_id: String,
    pub department: String,
    pub designation: String,
}

// 教职工档案更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct UpdateFacultyRequest {
    pub department: Option<String>,
    pub designation: Option<String>,
}
