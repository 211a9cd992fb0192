use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::{entities::EnrollmentStatus, requests::EnrollRequest},
    users::entities::UserRole,
};

pub async fn enroll(
    service: &EnrollmentService,
    enroll_request: EnrollRequest,
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

    // 学生只能给自己选课，管理员可以代办
    if user.role == UserRole::Student {
        match storage.get_student_by_user_id(user.id).await {
            Ok(Some(own)) if own.id == enroll_request.student_id => {}
            Ok(_) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Students can only enroll themselves",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Enrollment failed: {e}"),
                    )),
                );
            }
        }
    } else if user.role != UserRole::Admin {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only students and administrators can enroll",
        )));
    }

    // 学生和课程都必须存在
    match storage.get_student_by_id(enroll_request.student_id).await {
        Ok(Some(_)) => {}
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
                    format!("Enrollment failed: {e}"),
                )),
            );
        }
    }

    match storage.get_course_by_id(enroll_request.course_id).await {
        Ok(Some(_)) => {}
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
                    format!("Enrollment failed: {e}"),
                )),
            );
        }
    }

    // 已有记录：在读报冲突，退课记录重新激活
    match storage
        .get_enrollment(enroll_request.student_id, enroll_request.course_id)
        .await
    {
        Ok(Some(existing)) => {
            if existing.status == EnrollmentStatus::Dropped {
                return match storage
                    .update_enrollment_status(existing.id, EnrollmentStatus::Enrolled)
                    .await
                {
                    Ok(Some(enrollment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                        enrollment,
                        "Enrollment reactivated successfully",
                    ))),
                    Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::EnrollmentNotFound,
                        "Enrollment not found",
                    ))),
                    Err(e) => Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Enrollment failed: {e}"),
                        ),
                    )),
                };
            }
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                "Student is already enrolled in this course",
            )))
        }
        Ok(None) => match storage
            .create_enrollment(enroll_request.student_id, enroll_request.course_id)
            .await
        {
            Ok(enrollment) => Ok(HttpResponse::Created()
                .json(ApiResponse::success(enrollment, "Enrolled successfully"))),
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Enrollment failed: {e}"),
                )),
            ),
        },
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Enrollment failed: {e}"),
            )),
        ),
    }
}
