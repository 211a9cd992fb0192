use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode, courses::requests::CreateCourseRequest, users::entities::UserRole,
};
use crate::services::realtime;
use crate::utils::validate::validate_semester;

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if course_data.code.trim().is_empty() || course_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Course code and name must not be empty",
        )));
    }

    if let Err(msg) = validate_semester(course_data.semester) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if course_data.credits <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Credits must be positive",
        )));
    }

    // 指定授课教师时检查其档案存在
    if let Some(faculty_id) = course_data.faculty_id {
        match storage.get_faculty_by_id(faculty_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FacultyNotFound,
                    "Assigned faculty not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to create course: {e}"),
                    )),
                );
            }
        }
    }

    // 课程代码唯一性检查
    match storage.get_course_by_code(&course_data.code).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::CourseCodeAlreadyExists,
                "Course code already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create course: {e}"),
                )),
            );
        }
    }

    match storage.create_course(course_data).await {
        Ok(course) => {
            // 新课程对学生端开放选课，广播到学生角色房间
            realtime::push_event_to_role(
                &UserRole::Student,
                "course_created",
                serde_json::json!({
                    "course_id": course.id,
                    "code": course.code,
                    "name": course.name,
                    "semester": course.semester,
                }),
            );

            Ok(HttpResponse::Created().json(ApiResponse::success(
                course,
                "Course created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create course: {e}"),
            )),
        ),
    }
}
