//! AI 分析结果实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ai_analytics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub analysis_type: String,
    pub provider: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub fallback: bool,
    pub requested_by: i64,
    pub created_at: i64,
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
    pub fn into_ai_insight(self) -> crate::models::ai::entities::AiInsight {
        use crate::models::ai::entities::AiInsight;
        use chrono::{DateTime, Utc};

        AiInsight {
            id: self.id,
            student_id: self.student_id,
            analysis_type: self.analysis_type,
            provider: self.provider,
            content: self.content,
            fallback: self.fallback,
            requested_by: self.requested_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
