use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通知类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub enum NotificationType {
    AssignmentCreated, // 新作业
    GradePosted,       // 成绩发布
    FeeInvoice,        // 缴费单开具
    FeePayment,        // 缴费确认
    System,            // 系统通知
}

impl<'de> Deserialize<'de> for NotificationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| {
                serde::de::Error::custom(format!(
                    "无效的通知类型: '{s}'. 支持的类型: assignment_created, grade_posted, fee_invoice, fee_payment, system"
                ))
            })
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::AssignmentCreated => write!(f, "assignment_created"),
            NotificationType::GradePosted => write!(f, "grade_posted"),
            NotificationType::FeeInvoice => write!(f, "fee_invoice"),
            NotificationType::FeePayment => write!(f, "fee_payment"),
            NotificationType::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assignment_created" => Ok(NotificationType::AssignmentCreated),
            "grade_posted" => Ok(NotificationType::GradePosted),
            "fee_invoice" => Ok(NotificationType::FeeInvoice),
            "fee_payment" => Ok(NotificationType::FeePayment),
            "system" => Ok(NotificationType::System),
            _ => Err(format!("Invalid notification type: {s}")),
        }
    }
}

// 通知关联的业务对象类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub enum ReferenceType {
    Assignment,
    Grade,
    Fee,
    Course,
}

impl<'de> Deserialize<'de> for ReferenceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的关联类型: '{s}'. 支持的类型: assignment, grade, fee, course"
            ))
        })
    }
}

impl std::fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceType::Assignment => write!(f, "assignment"),
            ReferenceType::Grade => write!(f, "grade"),
            ReferenceType::Fee => write!(f, "fee"),
            ReferenceType::Course => write!(f, "course"),
        }
    }
}

impl std::str::FromStr for ReferenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assignment" => Ok(ReferenceType::Assignment),
            "grade" => Ok(ReferenceType::Grade),
            "fee" => Ok(ReferenceType::Fee),
            "course" => Ok(ReferenceType::Course),
            _ => Err(format!("Invalid reference type: {s}")),
        }
    }
}

// 通知
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub notification_type: NotificationType,
    pub title: String,
    pub content: Option<String>,
    pub reference_type: Option<ReferenceType>,
    pub reference_id: Option<i64>,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_notification_type_roundtrip() {
        for t in [
            NotificationType::AssignmentCreated,
            NotificationType::GradePosted,
            NotificationType::FeeInvoice,
            NotificationType::FeePayment,
            NotificationType::System,
        ] {
            assert_eq!(NotificationType::from_str(&t.to_string()).unwrap(), t);
        }
    }
}
