use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::requests::RecordGradeRequest,
    notifications::entities::{NotificationType, ReferenceType},
};
use crate::services::courses::can_manage_course;
use crate::services::realtime;
use crate::storage::NewNotification;

pub async fn record_grade(
    service: &GradeService,
    grade_data: RecordGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    if grade_data.max_score <= 0.0
        || grade_data.score < 0.0
        || grade_data.score > grade_data.max_score
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ScoreOutOfRange,
            "Score must be between 0 and max score",
        )));
    }

    let student = match storage.get_student_by_id(grade_data.student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to record grade: {e}"),
                )),
            );
        }
    };

    let course = match storage.get_course_by_id(grade_data.course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to record grade: {e}"),
                )),
            );
        }
    };

    // 只有授课教师和管理员能录入成绩
    match can_manage_course(&storage, &user, &course).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::CoursePermissionDenied,
                "You can only record grades for courses you teach",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to record grade: {e}"),
                )),
            );
        }
    }

    // 关联作业必须属于同一门课，且分数不得超过作业满分
    if let Some(assignment_id) = grade_data.assignment_id {
        match storage.get_assignment_by_id(assignment_id).await {
            Ok(Some(assignment)) if assignment.course_id == grade_data.course_id => {
                if grade_data.score > assignment.max_score {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::ScoreOutOfRange,
                        "Score exceeds the assignment max score",
                    )));
                }
            }
            Ok(Some(_)) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Assignment does not belong to this course",
                )));
            }
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentNotFound,
                    "Assignment not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to record grade: {e}"),
                    )),
                );
            }
        }
    }

    let grade = match storage.record_grade(user.id, grade_data).await {
        Ok(grade) => grade,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to record grade: {e}"),
                )),
            );
        }
    };

    // 给学生落库通知并实时推送
    let notification = NewNotification {
        notification_type: NotificationType::GradePosted,
        title: format!("《{}》成绩已发布", course.name),
        content: Some(format!("{} 得分 {}/{}", grade.grade_type, grade.score, grade.max_score)),
        reference_type: Some(ReferenceType::Grade),
        reference_id: Some(grade.id),
    };
    match storage.create_notification(student.user_id, notification).await {
        Ok(saved) => realtime::push_notification_to_user(student.user_id, saved),
        Err(e) => tracing::warn!("Failed to create grade notification: {}", e),
    }

    Ok(HttpResponse::Created().json(ApiResponse::success(grade, "Grade recorded successfully")))
}
