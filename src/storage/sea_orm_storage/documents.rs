use super::SeaOrmStorage;
use crate::entity::documents::{ActiveModel, Column, Entity as Documents};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    documents::{
        entities::Document, requests::DocumentListParams, responses::DocumentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 登记上传文档
    pub async fn create_document_impl(
        &self,
        owner_id: i64,
        file_token: &str,
        file_name: &str,
        file_size: i64,
        content_type: &str,
        category: &str,
    ) -> Result<Document> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            owner_id: Set(owner_id),
            file_token: Set(file_token.to_string()),
            file_name: Set(file_name.to_string()),
            file_size: Set(file_size),
            content_type: Set(content_type.to_string()),
            category: Set(category.to_string()),
            uploaded_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("登记文档失败: {e}")))?;

        Ok(result.into_document())
    }

    /// 通过 ID 获取文档
    pub async fn get_document_by_id_impl(&self, id: i64) -> Result<Option<Document>> {
        let result = Documents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询文档失败: {e}")))?;

        Ok(result.map(|m| m.into_document()))
    }

    /// 通过文件令牌获取文档
    pub async fn get_document_by_token_impl(&self, token: &str) -> Result<Option<Document>> {
        let result = Documents::find()
            .filter(Column::FileToken.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询文档失败: {e}")))?;

        Ok(result.map(|m| m.into_document()))
    }

    /// 分页列出文档
    pub async fn list_documents_with_pagination_impl(
        &self,
        params: DocumentListParams,
    ) -> Result<DocumentListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Documents::find();

        if let Some(ref category) = params.category {
            select = select.filter(Column::Category.eq(category));
        }

        if let Some(owner_id) = params.owner_id {
            select = select.filter(Column::OwnerId.eq(owner_id));
        }

        select = select.order_by_desc(Column::UploadedAt);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询文档总数失败: {e}")))?;

        let documents = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询文档列表失败: {e}")))?;

        Ok(DocumentListResponse {
            items: documents.into_iter().map(|m| m.into_document()).collect(),
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 删除文档记录
    pub async fn delete_document_impl(&self, id: i64) -> Result<bool> {
        let result = Documents::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除文档失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
