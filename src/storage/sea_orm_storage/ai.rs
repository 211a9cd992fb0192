use super::SeaOrmStorage;
use crate::entity::{ai_analytics, chat_history, courses, enrollments, faculty, students, users};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    ai::{
        entities::{AiInsight, ChatMessage},
        requests::{ChatHistoryParams, InsightListParams},
        responses::{ChatHistoryResponse, InsightListResponse},
    },
};
use crate::storage::EntityCountSnapshot;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 落库一条对话记录
    pub async fn insert_chat_message_impl(
        &self,
        user_id: i64,
        provider: &str,
        prompt: &str,
        response: &str,
        fallback: bool,
    ) -> Result<ChatMessage> {
        let now = chrono::Utc::now().timestamp();

        let model = chat_history::ActiveModel {
            user_id: Set(user_id),
            provider: Set(provider.to_string()),
            prompt: Set(prompt.to_string()),
            response: Set(response.to_string()),
            fallback: Set(fallback),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("保存对话记录失败: {e}")))?;

        Ok(result.into_chat_message())
    }

    /// 分页列出用户的对话历史，最新在前
    pub async fn list_chat_history_with_pagination_impl(
        &self,
        user_id: i64,
        params: ChatHistoryParams,
    ) -> Result<ChatHistoryResponse> {
        let (page, size) = params.pagination.normalized();

        let select = chat_history::Entity::find()
            .filter(chat_history::Column::UserId.eq(user_id))
            .order_by_desc(chat_history::Column::CreatedAt);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询对话总数失败: {e}")))?;

        let messages = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询对话历史失败: {e}")))?;

        Ok(ChatHistoryResponse {
            items: messages.into_iter().map(|m| m.into_chat_message()).collect(),
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 落库一条学情分析结果
    pub async fn insert_ai_insight_impl(
        &self,
        student_id: i64,
        analysis_type: &str,
        provider: &str,
        content: &str,
        fallback: bool,
        requested_by: i64,
    ) -> Result<AiInsight> {
        let now = chrono::Utc::now().timestamp();

        let model = ai_analytics::ActiveModel {
            student_id: Set(student_id),
            analysis_type: Set(analysis_type.to_string()),
            provider: Set(provider.to_string()),
            content: Set(content.to_string()),
            fallback: Set(fallback),
            requested_by: Set(requested_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("保存分析结果失败: {e}")))?;

        Ok(result.into_ai_insight())
    }

    /// 分页列出学生的分析历史，最新在前
    pub async fn list_ai_insights_with_pagination_impl(
        &self,
        student_id: i64,
        params: InsightListParams,
    ) -> Result<InsightListResponse> {
        let (page, size) = params.pagination.normalized();

        let select = ai_analytics::Entity::find()
            .filter(ai_analytics::Column::StudentId.eq(student_id))
            .order_by_desc(ai_analytics::Column::CreatedAt);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询分析总数失败: {e}")))?;

        let insights = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询分析历史失败: {e}")))?;

        Ok(InsightListResponse {
            items: insights.into_iter().map(|m| m.into_ai_insight()).collect(),
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 各业务表行数快照
    pub async fn entity_counts_impl(&self) -> Result<EntityCountSnapshot> {
        let users = users::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计用户数量失败: {e}")))?;

        let students = students::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计学生数量失败: {e}")))?;

        let faculty = faculty::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计教职工数量失败: {e}")))?;

        let courses = courses::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计课程数量失败: {e}")))?;

        let enrollments = enrollments::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计选课数量失败: {e}")))?;

        Ok(EntityCountSnapshot {
            users,
            students,
            faculty,
            courses,
            enrollments,
        })
    }
}
