use super::SeaOrmStorage;
use crate::entity::{
    students::{ActiveModel, Column, Entity as Students},
    users,
};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentDetail},
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

/// 关联用户缺失时的兜底，正常情况外键保证存在
fn into_student_detail(
    student: crate::entity::students::Model,
    user: Option<users::Model>,
) -> StudentDetail {
    let (username, email, display_name) = match user {
        Some(u) => (u.username, u.email, u.display_name),
        None => (String::new(), String::new(), None),
    };
    StudentDetail {
        student: student.into_student(),
        username,
        email,
        display_name,
    }
}

impl SeaOrmStorage {
    /// 创建学生档案
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            roll_number: Set(req.roll_number),
            department: Set(req.department),
            semester: Set(req.semester),
            section: Set(req.section),
            admission_year: Set(req.admission_year),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建学生档案失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生档案
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过用户 ID 获取学生档案
    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过学号获取学生档案
    pub async fn get_student_by_roll_number_impl(
        &self,
        roll_number: &str,
    ) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::RollNumber.eq(roll_number))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生，附带关联用户信息
    pub async fn list_students_with_pagination_impl(
        &self,
        params: StudentListParams,
    ) -> Result<StudentListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Students::find().find_also_related(users::Entity);

        if let Some(ref department) = params.department {
            select = select.filter(Column::Department.eq(department));
        }

        if let Some(semester) = params.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        if let Some(ref section) = params.section {
            select = select.filter(Column::Section.eq(section));
        }

        // 搜索学号、用户名、显示名
        if let Some(ref search) = params.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::RollNumber.contains(&escaped))
                    .add(users::Column::Username.contains(&escaped))
                    .add(users::Column::DisplayName.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::RollNumber);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生总数失败: {e}")))?;

        let rows = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: rows
                .into_iter()
                .map(|(student, user)| into_student_detail(student, user))
                .collect(),
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 更新学生档案
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
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

        if let Some(semester) = update.semester {
            model.semester = Set(semester);
        }

        if let Some(section) = update.section {
            model.section = Set(section);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新学生档案失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生档案
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除学生档案失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
