use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 课程列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub faculty_id: Option<i64>,
    pub search: Option<String>,
}

// 课程创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub code: String,
    pub name: String,
    pub department: String,
    pub semester: i32,
    pub credits: i32,
    pub faculty_id: Option<i64>,
}

// 课程更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub credits: Option<i32>,
    pub faculty_id: Option<i64>,
}
