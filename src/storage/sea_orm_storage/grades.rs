use super::SeaOrmStorage;
use crate::entity::{
    courses,
    grades::{ActiveModel, Column, Entity as Grades},
};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginationInfo,
    grades::{
        entities::{CourseGradeSummary, Grade, letter_grade, score_percentage},
        requests::{GradeListParams, RecordGradeRequest, UpdateGradeRequest},
        responses::GradeListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 录入成绩
    pub async fn record_grade_impl(&self, graded_by: i64, req: RecordGradeRequest) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            assignment_id: Set(req.assignment_id),
            grade_type: Set(req.grade_type.to_string()),
            score: Set(req.score),
            max_score: Set(req.max_score),
            comment: Set(req.comment),
            graded_by: Set(graded_by),
            graded_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 修改成绩，记录最后评分人
    pub async fn update_grade_impl(
        &self,
        id: i64,
        graded_by: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        let existing = self.get_grade_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            graded_by: Set(graded_by),
            graded_at: Set(now),
            ..Default::default()
        };

        if let Some(score) = update.score {
            model.score = Set(score);
        }

        if let Some(comment) = update.comment {
            model.comment = Set(Some(comment));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新成绩失败: {e}")))?;

        self.get_grade_by_id_impl(id).await
    }

    /// 分页列出成绩
    pub async fn list_grades_with_pagination_impl(
        &self,
        params: GradeListParams,
    ) -> Result<GradeListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Grades::find();

        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(course_id) = params.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(ref grade_type) = params.grade_type {
            select = select.filter(Column::GradeType.eq(grade_type.to_string()));
        }

        select = select.order_by_desc(Column::GradedAt);

        let paginator = select.paginate(&self.db, size as u64);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询成绩总数失败: {e}")))?;

        let grades = paginator
            .fetch_page((page - 1) as u64)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(GradeListResponse {
            items: grades.into_iter().map(|m| m.into_grade()).collect(),
            pagination: PaginationInfo::new(page, size, total as i64),
        })
    }

    /// 学生各课程的平均得分率
    pub async fn grade_summary_impl(&self, student_id: i64) -> Result<Vec<CourseGradeSummary>> {
        let grades = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询成绩失败: {e}")))?;

        // course_id -> (条数, 得分率之和)
        let mut tallies: HashMap<i64, (i64, f64)> = HashMap::new();
        for grade in grades {
            let pct = score_percentage(grade.score, grade.max_score);
            let entry = tallies.entry(grade.course_id).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += pct;
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

        let mut summaries: Vec<CourseGradeSummary> = tallies
            .into_iter()
            .map(|(course_id, (count, pct_sum))| {
                let (course_code, course_name) =
                    course_infos.get(&course_id).cloned().unwrap_or_default();
                let average = (pct_sum / count as f64 * 100.0).round() / 100.0;
                CourseGradeSummary {
                    course_id,
                    course_code,
                    course_name,
                    grade_count: count,
                    average_percentage: average,
                    letter_grade: letter_grade(average).to_string(),
                }
            })
            .collect();

        summaries.sort_by(|a, b| a.course_code.cmp(&b.course_code));

        Ok(summaries)
    }
}
