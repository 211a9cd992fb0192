use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 学生列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub section: Option<String>,
    pub search: Option<String>,
}

// 学生档案创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub user_id: i64,
    pub roll_number: String,
    pub department: String,
    pub semester: i32,
    pub section: String,
    pub admission_year: i32,
}

// 学生档案更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub section: Option<String>,
}
