use super::SeaOrmStorage;
use crate::entity::{
    attendance::{ActiveModel, Column, Entity as Attendance},
    courses,
};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    attendance::{
        entities::{
            AttendanceRecord, AttendanceStatus, CourseAttendanceSummary, attendance_percentage,
        },
        requests::AttendanceListParams,
        responses::AttendanceListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 按课程+学生+日期幂等写入考勤，返回 (记录, 是否新建)
    pub async fn upsert_attendance_impl(
        &self,
        course_id: i64,
        student_id: i64,
        date: &str,
        status: AttendanceStatus,
        marked_by: i64,
    ) -> Result<(AttendanceRecord, bool)> {
        let now = chrono::Utc::now().timestamp();

        let existing = Attendance::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Date.eq(date))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考勤记录失败: {e}")))?;

        match existing {
            Some(record) => {
                let model = ActiveModel {
                    id: Set(record.id),
                    status: Set(status.to_string()),
                    marked_by: Set(marked_by),
                    updated_at: Set(now),
                    ..Default::default()
                };

                let updated = model
                    .update(&self.db)
                    .await
                    .map_err(|e| CampusError::database_operation(format!("更新考勤记录失败: {e}")))?;

                Ok((updated.into_attendance_record(), false))
            }
            None => {
                let model = ActiveModel {
                    course_id: Set(course_id),
                    student_id: Set(student_id),
                    date: Set(date.to_string()),
                    status: Set(status.to_string()),
                    marked_by: Set(marked_by),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };

                let inserted = model
                    .insert(&self.db)
                    .await
                    .map_err(|e| CampusError::database_operation(format!("创建考勤记录失败: {e}")))?;

                Ok((inserted.into_attendance_record(), true))
            }
        }
    }

    /// 通过 ID 获取考勤记录
    pub async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        let result = Attendance::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance_record()))
    }

    /// 修改单条考勤状态
    pub async fn update_attendance_status_impl(
        &self,
        id: i64,
        status: AttendanceStatus,
        marked_by: i64,
    ) -> Result<Option<AttendanceRecord>> {
        let existing = self.get_attendance_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            marked_by: Set(marked_by),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新考勤记录失败: {e}")))?;

        self.get_attendance_by_id_impl(id).await
    }

    /// 分页列出考勤记录
    pub async fn list_attendance_with_pagination_impl(
        &self,
        params: AttendanceListParams,
    ) -> Result<AttendanceListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Attendance::find();

        if let Some(course_id) = params.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(ref date) = params.date {
            select = select.filter(Column::Date.eq(date));
        }

        if let Some(ref status) = params.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select
            .order_by_desc(Column::Date)
            .order_by_asc(Column::StudentId);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考勤总数失败: {e}")))?;

        let records = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考勤列表失败: {e}")))?;

        Ok(AttendanceListResponse {
            items: records
                .into_iter()
                .map(|m| m.into_attendance_record())
                .collect(),
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 学生各课程的出勤汇总，迟到计入出勤
    pub async fn attendance_summary_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<CourseAttendanceSummary>> {
        let records = Attendance::find()
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考勤记录失败: {e}")))?;

        // course_id -> (总课次, 出勤课次)
        let mut tallies: HashMap<i64, (i64, i64)> = HashMap::new();
        for record in records {
            let attended = record
                .status
                .parse::<AttendanceStatus>()
                .map(|s| s.counts_as_attended())
                .unwrap_or(false);
            let entry = tallies.entry(record.course_id).or_insert((0, 0));
            entry.0 += 1;
            if attended {
                entry.1 += 1;
            }
        }

        if tallies.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i64> = tallies.keys().copied().collect();
        let course_infos: HashMap<i64, (String, String)> = courses::Entity::find()
            .filter(courses::Column::Id.is_in(course_ids))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程信息失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, (c.code, c.name)))
            .collect();

        let mut summaries: Vec<CourseAttendanceSummary> = tallies
            .into_iter()
            .map(|(course_id, (total, attended))| {
                let (course_code, course_name) =
                    course_infos.get(&course_id).cloned().unwrap_or_default();
                CourseAttendanceSummary {
                    course_id,
                    course_code,
                    course_name,
                    total_classes: total,
                    attended,
                    percentage: attendance_percentage(attended, total),
                }
            })
            .collect();

        summaries.sort_by(|a, b| a.course_code.cmp(&b.course_code));

        Ok(summaries)
    }
}
