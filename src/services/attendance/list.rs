use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, attendance::requests::AttendanceListParams, users::entities::UserRole,
};

pub async fn list_attendance(
    service: &AttendanceService,
    mut query: AttendanceListParams,
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

    // 学生只能看自己的考勤
    if user.role == UserRole::Student {
        match storage.get_student_by_user_id(user.id).await {
            Ok(Some(own)) => query.student_id = Some(own.id),
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::StudentNotFound,
                    "No student profile linked to this account",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to retrieve attendance: {e}"),
                    )),
                );
            }
        }
    }

    match storage.list_attendance_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Attendance records retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve attendance: {e}"),
            )),
        ),
    }
}
