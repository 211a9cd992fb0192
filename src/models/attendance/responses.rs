use super::entities::{AttendanceRecord, CourseAttendanceSummary};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 批量标记结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MarkAttendanceResponse {
    pub marked: i64,
    pub updated: i64,
}

// 考勤记录响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceResponse {
    pub record: AttendanceRecord,
}

// 考勤记录列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub items: Vec<AttendanceRecord>,
    pub pagination: PaginationInfo,
}

// 学生考勤汇总响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummaryResponse {
    pub student_id: i64,
    pub courses: Vec<CourseAttendanceSummary>,
    pub overall_percentage: f64,
}
