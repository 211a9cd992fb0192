use super::entities::{FacultyDetail, FacultyMember};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 教职工档案响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyResponse {
    pub faculty: FacultyMember,
}

// 教职工详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyDetailResponse {
    pub faculty: FacultyDetail,
}

// 教职工列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyListResponse {
    pub items: Vec<FacultyDetail>,
    pub pagination: PaginationInfo,
}
