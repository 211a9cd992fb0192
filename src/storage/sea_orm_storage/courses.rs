use super::SeaOrmStorage;
use crate::entity::{
    courses::{ActiveModel, Column, Entity as Courses},
    enrollments, faculty, users,
};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::{Course, CourseDetail},
        requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::entities::EnrollmentStatus,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            department: Set(req.department),
            semester: Set(req.semester),
            credits: Set(req.credits),
            faculty_id: Set(req.faculty_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过课程代码获取课程
    pub async fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 获取课程详情（含授课教师姓名与在读选课人数）
    pub async fn get_course_detail_impl(&self, id: i64) -> Result<Option<CourseDetail>> {
        let Some(course) = self.get_course_by_id_impl(id).await? else {
            return Ok(None);
        };

        let faculty_names = self
            .load_faculty_names(course.faculty_id.into_iter().collect())
            .await?;
        let counts = self.load_enrolled_counts(vec![course.id]).await?;

        let faculty_name = course.faculty_id.and_then(|fid| faculty_names.get(&fid).cloned());
        let enrolled_count = counts.get(&course.id).copied().unwrap_or(0);

        Ok(Some(CourseDetail {
            course,
            faculty_name,
            enrolled_count,
        }))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        params: CourseListParams,
    ) -> Result<CourseListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Courses::find();

        if let Some(ref department) = params.department {
            select = select.filter(Column::Department.eq(department));
        }

        if let Some(semester) = params.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        if let Some(faculty_id) = params.faculty_id {
            select = select.filter(Column::FacultyId.eq(faculty_id));
        }

        // 搜索课程代码和名称
        if let Some(ref search) = params.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Code.contains(&escaped))
                    .add(Column::Name.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::Code);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程总数失败: {e}")))?;

        let courses: Vec<Course> = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_course())
            .collect();

        // 批量补齐教师姓名与选课人数，避免逐行查询
        let faculty_ids: Vec<i64> = courses.iter().filter_map(|c| c.faculty_id).collect();
        let course_ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
        let faculty_names = self.load_faculty_names(faculty_ids).await?;
        let counts = self.load_enrolled_counts(course_ids).await?;

        let items = courses
            .into_iter()
            .map(|course| {
                let faculty_name = course
                    .faculty_id
                    .and_then(|fid| faculty_names.get(&fid).cloned());
                let enrolled_count = counts.get(&course.id).copied().unwrap_or(0);
                CourseDetail {
                    course,
                    faculty_name,
                    enrolled_count,
                }
            })
            .collect();

        Ok(CourseListResponse {
            items,
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        if let Some(semester) = update.semester {
            model.semester = Set(semester);
        }

        if let Some(credits) = update.credits {
            model.credits = Set(credits);
        }

        if let Some(faculty_id) = update.faculty_id {
            model.faculty_id = Set(Some(faculty_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 教师 ID -> 展示姓名（优先显示名，缺省用户名）
    async fn load_faculty_names(&self, faculty_ids: Vec<i64>) -> Result<HashMap<i64, String>> {
        if faculty_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = faculty::Entity::find()
            .filter(faculty::Column::Id.is_in(faculty_ids))
            .find_also_related(users::Entity)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询授课教师失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, user)| {
                user.map(|u| (member.id, u.display_name.unwrap_or(u.username)))
            })
            .collect())
    }

    /// 课程 ID -> 在读选课人数
    async fn load_enrolled_counts(&self, course_ids: Vec<i64>) -> Result<HashMap<i64, i64>> {
        if course_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64)> = enrollments::Entity::find()
            .select_only()
            .column(enrollments::Column::CourseId)
            .column_as(enrollments::Column::Id.count(), "cnt")
            .filter(enrollments::Column::CourseId.is_in(course_ids))
            .filter(enrollments::Column::Status.eq(EnrollmentStatus::Enrolled.to_string()))
            .group_by(enrollments::Column::CourseId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("统计选课人数失败: {e}")))?;

        Ok(rows.into_iter().collect())
    }
}
