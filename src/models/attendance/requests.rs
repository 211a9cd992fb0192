use super::entities::AttendanceStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 单个学生的考勤标记
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

// 批量考勤标记请求（一门课一天）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MarkAttendanceRequest {
    pub course_id: i64,
    /// YYYY-MM-DD
    pub date: String,
    pub entries: Vec<AttendanceEntry>,
}

// 考勤记录查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub course_id: Option<i64>,
    pub student_id: Option<i64>,
    pub date: Option<String>,
    pub status: Option<AttendanceStatus>,
}

// 单条考勤修改请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct UpdateAttendanceRequest {
    pub status: AttendanceStatus,
}
