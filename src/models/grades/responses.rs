use super::entities::{CourseGradeSummary, Grade};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 成绩响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeResponse {
    pub grade: Grade,
}

// 成绩列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListResponse {
    pub items: Vec<Grade>,
    pub pagination: PaginationInfo,
}

// 学生成绩汇总响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeSummaryResponse {
    pub student_id: i64,
    pub courses: Vec<CourseGradeSummary>,
    pub overall_percentage: f64,
    pub overall_letter_grade: String,
}
