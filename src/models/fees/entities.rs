use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 缴费状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub enum FeeStatus {
    Pending, // 待缴
    Partial, // 部分缴纳
    Paid,    // 已缴清
}

impl<'de> Deserialize<'de> for FeeStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(FeeStatus::Pending),
            "partial" => Ok(FeeStatus::Partial),
            "paid" => Ok(FeeStatus::Paid),
            _ => Err(serde::de::Error::custom(format!(
                "无效的缴费状态: '{s}'. 支持的状态: pending, partial, paid"
            ))),
        }
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeStatus::Pending => write!(f, "pending"),
            FeeStatus::Partial => write!(f, "partial"),
            FeeStatus::Paid => write!(f, "paid"),
        }
    }
}

impl std::str::FromStr for FeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FeeStatus::Pending),
            "partial" => Ok(FeeStatus::Partial),
            "paid" => Ok(FeeStatus::Paid),
            _ => Err(format!("Invalid fee status: {s}")),
        }
    }
}

// 缴费单
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct Fee {
    pub id: i64,
    pub student_id: i64,
    pub semester: i32,
    pub description: String,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub status: FeeStatus,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Fee {
    /// 逾期由读取时推导，不落库
    pub fn is_overdue(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.status != FeeStatus::Paid && self.due_date < now
    }

    pub fn balance(&self) -> f64 {
        (self.amount_due - self.amount_paid).max(0.0)
    }
}

/// 根据已缴金额推导缴费状态
pub fn derive_fee_status(amount_due: f64, amount_paid: f64) -> FeeStatus {
    if amount_paid >= amount_due {
        FeeStatus::Paid
    } else if amount_paid > 0.0 {
        FeeStatus::Partial
    } else {
        FeeStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_fee_status() {
        assert_eq!(derive_fee_status(100.0, 0.0), FeeStatus::Pending);
        assert_eq!(derive_fee_status(100.0, 40.0), FeeStatus::Partial);
        assert_eq!(derive_fee_status(100.0, 100.0), FeeStatus::Paid);
    }

    #[test]
    fn test_overdue_derivation() {
        let now = chrono::Utc::now();
        let fee = Fee {
            id: 1,
            student_id: 1,
            semester: 3,
            description: "学费".to_string(),
            amount_due: 100.0,
            amount_paid: 20.0,
            status: FeeStatus::Partial,
            due_date: now - chrono::TimeDelta::days(1),
            paid_at: None,
            created_at: now,
            updated_at: now,
        };
        assert!(fee.is_overdue(now));
        assert_eq!(fee.balance(), 80.0);

        let paid = Fee {
            status: FeeStatus::Paid,
            amount_paid: 100.0,
            ..fee
        };
        assert!(!paid.is_overdue(now));
    }
}
