use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    notifications::{
        entities::Notification, requests::NotificationListParams,
        responses::NotificationListResponse,
    },
};
use crate::storage::NewNotification;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

fn build_active_model(user_id: i64, payload: &NewNotification, now: i64) -> ActiveModel {
    ActiveModel {
        user_id: Set(user_id),
        notification_type: Set(payload.notification_type.to_string()),
        title: Set(payload.title.clone()),
        content: Set(payload.content.clone()),
        reference_type: Set(payload.reference_type.as_ref().map(|r| r.to_string())),
        reference_id: Set(payload.reference_id),
        is_read: Set(false),
        created_at: Set(now),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 给单个用户投递通知
    pub async fn create_notification_impl(
        &self,
        user_id: i64,
        notification: NewNotification,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let result = build_active_model(user_id, &notification, now)
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建通知失败: {e}")))?;

        Ok(result.into_notification())
    }

    /// 给多个用户批量投递同一条通知
    pub async fn create_notifications_bulk_impl(
        &self,
        user_ids: &[i64],
        notification: NewNotification,
    ) -> Result<u64> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let models: Vec<ActiveModel> = user_ids
            .iter()
            .map(|&user_id| build_active_model(user_id, &notification, now))
            .collect();

        let count = models.len() as u64;
        Notifications::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("批量创建通知失败: {e}")))?;

        Ok(count)
    }

    /// 分页列出用户通知
    pub async fn list_notifications_with_pagination_impl(
        &self,
        user_id: i64,
        params: NotificationListParams,
    ) -> Result<NotificationListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Notifications::find().filter(Column::UserId.eq(user_id));

        if params.unread_only.unwrap_or(false) {
            select = select.filter(Column::IsRead.eq(false));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询通知总数失败: {e}")))?;

        let notifications = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(NotificationListResponse {
            items: notifications
                .into_iter()
                .map(|m| m.into_notification())
                .collect(),
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 标记单条通知已读，只能操作自己的通知
    pub async fn mark_notification_read_impl(
        &self,
        user_id: i64,
        notification_id: i64,
    ) -> Result<bool> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::Id.eq(notification_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("标记通知已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 全部标记已读
    pub async fn mark_all_notifications_read_impl(&self, user_id: i64) -> Result<u64> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("批量标记已读失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 统计未读通知
    pub async fn count_unread_notifications_impl(&self, user_id: i64) -> Result<i64> {
        let count = Notifications::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计未读通知失败: {e}")))?;

        Ok(count as i64)
    }
}
