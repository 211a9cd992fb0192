use serde::Serialize;
use ts_rs::TS;

/// 各业务表行数统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct EntityCounts {
    pub users: i64,
    pub students: i64,
    pub faculty: i64,
    pub courses: i64,
    pub enrollments: i64,
}

/// 运行状态响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemStatusResponse {
    pub version: String,
    pub environment: String,
    pub uptime_seconds: i64,
    pub online_users: usize,
    pub counts: EntityCounts,
}
