//! 费用实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub semester: i32,
    pub description: String,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub status: String,
    pub due_date: i64,
    pub paid_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_fee(self) -> crate::models::fees::entities::Fee {
        use crate::models::fees::entities::{Fee, FeeStatus};
        use chrono::{DateTime, Utc};

        Fee {
            id: self.id,
            student_id: self.student_id,
            semester: self.semester,
            description: self.description,
            amount_due: self.amount_due,
            amount_paid: self.amount_paid,
            status: self.status.parse::<FeeStatus>().unwrap_or(FeeStatus::Pending),
            due_date: DateTime::<Utc>::from_timestamp(self.due_date, 0).unwrap_or_default(),
            paid_at: self
                .paid_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
