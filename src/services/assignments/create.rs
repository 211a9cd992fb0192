use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::requests::CreateAssignmentRequest,
    notifications::entities::{NotificationType, ReferenceType},
};
use crate::services::courses::can_manage_course;
use crate::services::realtime;
use crate::storage::NewNotification;

pub async fn create_assignment(
    service: &AssignmentService,
    assignment_data: CreateAssignmentRequest,
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

    if assignment_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Assignment title must not be empty",
        )));
    }

    if assignment_data.due_date <= chrono::Utc::now() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DueDateInPast,
            "Due date must be in the future",
        )));
    }

    if assignment_data.max_score <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Max score must be positive",
        )));
    }

    let course = match storage.get_course_by_id(assignment_data.course_id).await {
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
                    format!("Failed to create assignment: {e}"),
                )),
            );
        }
    };

    // 只有授课教师和管理员能发布作业
    match can_manage_course(&storage, &user, &course).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::CoursePermissionDenied,
                "You can only create assignments for courses you teach",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create assignment: {e}"),
                )),
            );
        }
    }

    let assignment = match storage.create_assignment(user.id, assignment_data).await {
        Ok(assignment) => assignment,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create assignment: {e}"),
                )),
            );
        }
    };

    // 给在读学生落库通知并实时推送
    if let Ok(user_ids) = storage.list_enrolled_user_ids(assignment.course_id).await {
        let notification = NewNotification {
            notification_type: NotificationType::AssignmentCreated,
            title: format!("新作业：{}", assignment.title),
            content: Some(format!("《{}》发布了新作业", course.name)),
            reference_type: Some(ReferenceType::Assignment),
            reference_id: Some(assignment.id),
        };
        if let Err(e) = storage
            .create_notifications_bulk(&user_ids, notification)
            .await
        {
            tracing::warn!("Failed to create assignment notifications: {}", e);
        }
    }

    // 广播到课程房间
    realtime::push_event_to_course(
        assignment.course_id,
        "assignment_created",
        serde_json::json!({
            "assignment_id": assignment.id,
            "course_id": assignment.course_id,
            "title": assignment.title,
            "due_date": assignment.due_date,
        }),
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(
        assignment,
        "Assignment created successfully",
    )))
}
