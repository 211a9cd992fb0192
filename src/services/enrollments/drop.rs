use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, enrollments::entities::EnrollmentStatus, users::entities::UserRole,
};

pub async fn drop_enrollment(
    service: &EnrollmentService,
    enrollment_id: i64,
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

    let enrollment = match storage.get_enrollment_by_id(enrollment_id).await {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Drop failed: {e}"),
                )),
            );
        }
    };

    // 学生只能退自己的课
    if user.role == UserRole::Student {
        match storage.get_student_by_user_id(user.id).await {
            Ok(Some(own)) if own.id == enrollment.student_id => {}
            Ok(_) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Students can only drop their own enrollments",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Drop failed: {e}"),
                    )),
                );
            }
        }
    } else if user.role != UserRole::Admin {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only students and administrators can drop enrollments",
        )));
    }

    if enrollment.status == EnrollmentStatus::Dropped {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            enrollment,
            "Enrollment already dropped",
        )));
    }

    match storage
        .update_enrollment_status(enrollment_id, EnrollmentStatus::Dropped)
        .await
    {
        Ok(Some(enrollment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            enrollment,
            "Enrollment dropped successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Drop failed: {e}"),
            )),
        ),
    }
}
