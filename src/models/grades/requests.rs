use super::entities::GradeType;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 成绩列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub grade_type: Option<GradeType>,
}

// 成绩录入请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct RecordGradeRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub assignment_id: Option<i64>,
    pub grade_type: GradeType,
    pub score: f64,
    /// 满分，不传按百分制
    #[serde(default = "default_max_score")]
    pub max_score: f64,
    pub comment: Option<String>,
}

fn default_max_score() -> f64 {
    100.0
}

// 成绩修改请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct UpdateGradeRequest {
    pub score: Option<f64>,
    pub comment: Option<String>,
}
