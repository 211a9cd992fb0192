use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教职工档案
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyMember {
    pub id: i64,
    pub user_id: i64,
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 教职工档案 + 关联用户信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub faculty: FacultyMember,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
}
