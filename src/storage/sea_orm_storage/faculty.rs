use super::SeaOrmStorage;
use crate::entity::{
    faculty::{ActiveModel, Column, Entity as Faculty},
    users,
};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    faculty::{
        entities::{FacultyDetail, FacultyMember},
        requests::{CreateFacultyRequest, FacultyListParams, UpdateFacultyRequest},
        responses::FacultyListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

fn into_faculty_detail(
    member: crate::entity::faculty::Model,
    user: Option<users::Model>,
) -> FacultyDetail {
    let (username, email, display_name) = match user {
        Some(u) => (u.username, u.email, u.display_name),
        None => (String::new(), String::new(), None),
    };
    FacultyDetail {
        faculty: member.into_faculty_member(),
        username,
        email,
        display_name,
    }
}

impl SeaOrmStorage {
    /// 创建教职工档案
    pub async fn create_faculty_impl(&self, req: CreateFacultyRequest) -> Result<FacultyMember> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            employee_id: Set(req.employee_id),
            department: Set(req.department),
            designation: Set(req.designation),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建教职工档案失败: {e}")))?;

        Ok(result.into_faculty_member())
    }

    /// 通过 ID 获取教职工档案
    pub async fn get_faculty_by_id_impl(&self, id: i64) -> Result<Option<FacultyMember>> {
        let result = Faculty::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教职工档案失败: {e}")))?;

        Ok(result.map(|m| m.into_faculty_member()))
    }

    /// 通过用户 ID 获取教职工档案
    pub async fn get_faculty_by_user_id_impl(&self, user_id: i64) -> Result<Option<FacultyMember>> {
        let result = Faculty::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教职工档案失败: {e}")))?;

        Ok(result.map(|m| m.into_faculty_member()))
    }

    /// 通过工号获取教职工档案
    pub async fn get_faculty_by_employee_id_impl(
        &self,
        employee_id: &str,
    ) -> Result<Option<FacultyMember>> {
        let result = Faculty::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教职工档案失败: {e}")))?;

        Ok(result.map(|m| m.into_faculty_member()))
    }

    /// 分页列出教职工，附带关联用户信息
    pub async fn list_faculty_with_pagination_impl(
        &self,
        params: FacultyListParams,
    ) -> Result<FacultyListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Faculty::find().find_also_related(users::Entity);

        if let Some(ref department) = params.department {
            select = select.filter(Column::Department.eq(department));
        }

        // 搜索工号、用户名、显示名
        if let Some(ref search) = params.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::EmployeeId.contains(&escaped))
                    .add(users::Column::Username.contains(&escaped))
                    .add(users::Column::DisplayName.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::EmployeeId);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教职工总数失败: {e}")))?;

        let rows = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教职工列表失败: {e}")))?;

        Ok(FacultyListResponse {
            items: rows
                .into_iter()
                .map(|(member, user)| into_faculty_detail(member, user))
                .collect(),
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 更新教职工档案
    pub async fn update_faculty_impl(
        &self,
        id: i64,
        update: UpdateFacultyRequest,
    ) -> Result<Option<FacultyMember>> {
        let existing = self.get_faculty_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        if let Some(designation) = update.designation {
            model.designation = Set(designation);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新教职工档案失败: {e}")))?;

        self.get_faculty_by_id_impl(id).await
    }

    /// 删除教职工档案
    pub async fn delete_faculty_impl(&self, id: i64) -> Result<bool> {
        let result = Faculty::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除教职工档案失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
