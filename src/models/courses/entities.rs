use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub department: String,
    pub semester: i32,
    pub credits: i32,
    /// 授课教师，可能尚未分配
    pub faculty_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 课程 + 授课教师姓名与选课人数
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub course: Course,
    pub faculty_name: Option<String>,
    pub enrolled_count: i64,
}
