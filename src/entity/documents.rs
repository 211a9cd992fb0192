//! 文档实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub owner_id: i64,
    #[sea_orm(unique)]
    pub file_token: String,
    pub file_name: String,
    pub file_size: i64,
    pub content_type: String,
    pub category: String,
    pub uploaded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id"
    )]
    Owner,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_document(self) -> crate::models::documents::entities::Document {
        use crate::models::documents::entities::Document;
        use chrono::{DateTime, Utc};

        Document {
            id: self.id,
            owner_id: self.owner_id,
            file_token: self.file_token,
            file_name: self.file_name,
            file_size: self.file_size,
            content_type: self.content_type,
            category: self.category,
            uploaded_at: DateTime::<Utc>::from_timestamp(self.uploaded_at, 0).unwrap_or_default(),
        }
    }
}
