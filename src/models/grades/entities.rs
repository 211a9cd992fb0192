use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub enum GradeType {
    Assignment, // 作业
    Midterm,    // 期中
    Final,      // 期末
}

impl<'de> Deserialize<'de> for GradeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "assignment" => Ok(GradeType::Assignment),
            "midterm" => Ok(GradeType::Midterm),
            "final" => Ok(GradeType::Final),
            _ => Err(serde::de::Error::custom(format!(
                "无效的成绩类型: '{s}'. 支持的类型: assignment, midterm, final"
            ))),
        }
    }
}

impl std::fmt::Display for GradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeType::Assignment => write!(f, "assignment"),
            GradeType::Midterm => write!(f, "midterm"),
            GradeType::Final => write!(f, "final"),
        }
    }
}

impl std::str::FromStr for GradeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assignment" => Ok(GradeType::Assignment),
            "midterm" => Ok(GradeType::Midterm),
            "final" => Ok(GradeType::Final),
            _ => Err(format!("Invalid grade type: {s}")),
        }
    }
}

// 成绩记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub assignment_id: Option<i64>,
    pub grade_type: GradeType,
    pub score: f64,
    pub max_score: f64,
    pub comment: Option<String>,
    pub graded_by: i64,
    pub graded_at: chrono::DateTime<chrono::Utc>,
}

// 单门课程的成绩汇总
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CourseGradeSummary {
    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub grade_count: i64,
    /// 平均得分率，0-100
    pub average_percentage: f64,
    pub letter_grade: String,
}

/// 得分率，0-100，保留两位小数
pub fn score_percentage(score: f64, max_score: f64) -> f64 {
    if max_score <= 0.0 {
        return 0.0;
    }
    ((score / max_score) * 10000.0).round() / 100.0
}

/// 按百分比给出等第
pub fn letter_grade(percentage: f64) -> &'static str {
    if percentage >= 90.0 {
        "A"
    } else if percentage >= 80.0 {
        "B"
    } else if percentage >= 70.0 {
        "C"
    } else if percentage >= 60.0 {
        "D"
    } else {
        "F"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_percentage() {
        assert_eq!(score_percentage(45.0, 50.0), 90.0);
        assert_eq!(score_percentage(1.0, 3.0), 33.33);
        assert_eq!(score_percentage(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_letter_grade_boundaries() {
        assert_eq!(letter_grade(95.0), "A");
        assert_eq!(letter_grade(90.0), "A");
        assert_eq!(letter_grade(89.99), "B");
        assert_eq!(letter_grade(70.0), "C");
        assert_eq!(letter_grade(60.0), "D");
        assert_eq!(letter_grade(59.9), "F");
    }
}
