use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{entities::attendance_percentage, responses::AttendanceSummaryResponse},
    users::entities::UserRole,
};

pub async fn attendance_summary(
    service: &AttendanceService,
    student_id: i64,
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

    // 学生只能查自己的汇总
    if user.role == UserRole::Student {
        match storage.get_student_by_user_id(user.id).await {
            Ok(Some(own)) if own.id == student_id => {}
            Ok(_) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Students can only view their own attendance summary",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to retrieve attendance summary: {e}"),
                    )),
                );
            }
        }
    }

    match storage.get_student_by_id(student_id).await {
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
                    format!("Failed to retrieve attendance summary: {e}"),
                )),
            );
        }
    }

    match storage.attendance_summary(student_id).await {
        Ok(courses) => {
            let total: i64 = courses.iter().map(|c| c.total_classes).sum();
            let attended: i64 = courses.iter().map(|c| c.attended).sum();

            let response = AttendanceSummaryResponse {
                student_id,
                overall_percentage: attendance_percentage(attended, total),
                courses,
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Attendance summary retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve attendance summary: {e}"),
            )),
        ),
    }
}
