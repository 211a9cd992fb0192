use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 选课状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub enum EnrollmentStatus {
    Enrolled,  // 在读
    Dropped,   // 退课
    Completed, // 已修完
}

impl<'de> Deserialize<'de> for EnrollmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "enrolled" => Ok(EnrollmentStatus::Enrolled),
            "dropped" => Ok(EnrollmentStatus::Dropped),
            "completed" => Ok(EnrollmentStatus::Completed),
            _ => Err(serde::de::Error::custom(format!(
                "无效的选课状态: '{s}'. 支持的状态: enrolled, dropped, completed"
            ))),
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Enrolled => write!(f, "enrolled"),
            EnrollmentStatus::Dropped => write!(f, "dropped"),
            EnrollmentStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enrolled" => Ok(EnrollmentStatus::Enrolled),
            "dropped" => Ok(EnrollmentStatus::Dropped),
            "completed" => Ok(EnrollmentStatus::Completed),
            _ => Err(format!("Invalid enrollment status: {s}")),
        }
    }
}

// 选课记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub status: EnrollmentStatus,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 选课记录 + 课程信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub enrollment: Enrollment,
    pub course_code: String,
    pub course_name: String,
    pub roll_number: String,
}
