use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生档案
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub roll_number: String,
    pub department: String,
    pub semester: i32,
    pub section: String,
    pub admission_year: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学生档案 + 关联用户信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
}
