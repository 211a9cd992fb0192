use super::SeaOrmStorage;
use crate::entity::{
    assignments::{ActiveModel, Column, Entity as Assignments},
    courses,
};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::{Assignment, AssignmentDetail},
        requests::{AssignmentListParams, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(req.course_id),
            created_by: Set(created_by),
            title: Set(req.title),
            description: Set(req.description),
            due_date: Set(req.due_date.timestamp()),
            max_score: Set(req.max_score),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = self.get_assignment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date.timestamp());
        }

        if let Some(max_score) = update.max_score {
            model.max_score = Set(max_score);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_assignment_by_id_impl(id).await
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出作业，附带课程信息
    pub async fn list_assignments_with_pagination_impl(
        &self,
        params: AssignmentListParams,
    ) -> Result<AssignmentListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Assignments::find();

        if let Some(course_id) = params.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 只看未截止的作业
        if params.upcoming.unwrap_or(false) {
            let now = chrono::Utc::now().timestamp();
            select = select.filter(Column::DueDate.gt(now));
        }

        select = select.order_by_asc(Column::DueDate);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询作业总数失败: {e}")))?;

        let assignments: Vec<Assignment> = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        let course_ids: Vec<i64> = assignments.iter().map(|a| a.course_id).collect();
        let course_infos: HashMap<i64, (String, String)> = if course_ids.is_empty() {
            HashMap::new()
        } else {
            courses::Entity::find()
                .filter(courses::Column::Id.is_in(course_ids))
                .all(&self.db)
                .await
                .map_err(|e| CampusError::database_operation(format!("查询课程信息失败: {e}")))?
                .into_iter()
                .map(|c| (c.id, (c.code, c.name)))
                .collect()
        };

        let items = assignments
            .into_iter()
            .map(|assignment| {
                let (course_code, course_name) = course_infos
                    .get(&assignment.course_id)
                    .cloned()
                    .unwrap_or_default();
                AssignmentDetail {
                    assignment,
                    course_code,
                    course_name,
                }
            })
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }
}
