use super::SeaOrmStorage;
use crate::entity::{
    courses,
    enrollments::{ActiveModel, Column, Entity as Enrollments},
    faculty, students,
};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    enrollments::{
        entities::{Enrollment, EnrollmentDetail, EnrollmentStatus},
        requests::EnrollmentListParams,
        responses::EnrollmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 获取指定学生在指定课程的选课记录
    pub async fn get_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 创建选课记录
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            status: Set(EnrollmentStatus::Enrolled.to_string()),
            enrolled_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 更新选课状态
    pub async fn update_enrollment_status_impl(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        let existing = self.get_enrollment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新选课状态失败: {e}")))?;

        self.get_enrollment_by_id_impl(id).await
    }

    /// 分页列出选课记录，附带课程与学号信息
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        params: EnrollmentListParams,
    ) -> Result<EnrollmentListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Enrollments::find();

        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(course_id) = params.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(ref status) = params.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::EnrolledAt);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课总数失败: {e}")))?;

        let enrollments: Vec<Enrollment> = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_enrollment())
            .collect();

        // 批量补齐课程代码/名称与学号
        let course_ids: Vec<i64> = enrollments.iter().map(|e| e.course_id).collect();
        let student_ids: Vec<i64> = enrollments.iter().map(|e| e.student_id).collect();

        let courses_map: HashMap<i64, (String, String)> = if course_ids.is_empty() {
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

        let rolls_map: HashMap<i64, String> = if student_ids.is_empty() {
            HashMap::new()
        } else {
            students::Entity::find()
                .filter(students::Column::Id.is_in(student_ids))
                .all(&self.db)
                .await
                .map_err(|e| CampusError::database_operation(format!("查询学生信息失败: {e}")))?
                .into_iter()
                .map(|s| (s.id, s.roll_number))
                .collect()
        };

        let items = enrollments
            .into_iter()
            .map(|enrollment| {
                let (course_code, course_name) = courses_map
                    .get(&enrollment.course_id)
                    .cloned()
                    .unwrap_or_default();
                let roll_number = rolls_map
                    .get(&enrollment.student_id)
                    .cloned()
                    .unwrap_or_default();
                EnrollmentDetail {
                    enrollment,
                    course_code,
                    course_name,
                    roll_number,
                }
            })
            .collect();

        Ok(EnrollmentListResponse {
            items,
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 课程在读学生对应的用户 ID 列表，用于课程广播
    pub async fn list_enrolled_user_ids_impl(&self, course_id: i64) -> Result<Vec<i64>> {
        let student_ids: Vec<i64> = Enrollments::find()
            .select_only()
            .column(Column::StudentId)
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Status.eq(EnrollmentStatus::Enrolled.to_string()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询选课学生失败: {e}")))?;

        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<i64> = students::Entity::find()
            .select_only()
            .column(students::Column::UserId)
            .filter(students::Column::Id.is_in(student_ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生用户失败: {e}")))?;

        Ok(user_ids)
    }

    /// 用户相关的课程ID：学生取已选课程，教师取所授课程
    pub async fn course_ids_for_user_impl(&self, user_id: i64) -> Result<Vec<i64>> {
        let mut course_ids: Vec<i64> = Vec::new();

        let student_id: Option<i64> = students::Entity::find()
            .select_only()
            .column(students::Column::Id)
            .filter(students::Column::UserId.eq(user_id))
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生档案失败: {e}")))?;

        if let Some(student_id) = student_id {
            let enrolled: Vec<i64> = Enrollments::find()
                .select_only()
                .column(Column::CourseId)
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::Status.eq(EnrollmentStatus::Enrolled.to_string()))
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(|e| CampusError::database_operation(format!("查询选课记录失败: {e}")))?;
            course_ids.extend(enrolled);
        }

        let faculty_id: Option<i64> = faculty::Entity::find()
            .select_only()
            .column(faculty::Column::Id)
            .filter(faculty::Column::UserId.eq(user_id))
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教师档案失败: {e}")))?;

        if let Some(faculty_id) = faculty_id {
            let taught: Vec<i64> = courses::Entity::find()
                .select_only()
                .column(courses::Column::Id)
                .filter(courses::Column::FacultyId.eq(faculty_id))
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(|e| CampusError::database_operation(format!("查询授课课程失败: {e}")))?;
            course_ids.extend(taught);
        }

        course_ids.sort_unstable();
        course_ids.dedup();
        Ok(course_ids)
    }
}
