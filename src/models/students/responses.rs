use super::entities::{Student, StudentDetail};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 学生档案响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentResponse {
    pub student: Student,
}

// 学生详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentDetailResponse {
    pub student: StudentDetail,
}

// 学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub items: Vec<StudentDetail>,
    pub pagination: PaginationInfo,
}
