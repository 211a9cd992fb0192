use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacultyService;
use crate::models::{
    ApiResponse, ErrorCode, faculty::requests::CreateFacultyRequest, users::entities::UserRole,
};

pub async fn create_faculty(
    service: &FacultyService,
    faculty_data: CreateFacultyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if faculty_data.employee_id.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Employee ID must not be empty",
        )));
    }

    // 关联用户必须存在且是教职工角色
    match storage.get_user_by_id(faculty_data.user_id).await {
        Ok(Some(user)) => {
            if user.role != UserRole::Faculty {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Linked user does not have the faculty role",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Linked user not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create faculty: {e}"),
                )),
            );
        }
    }

    // 工号唯一性检查
    match storage
        .get_faculty_by_employee_id(&faculty_data.employee_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmployeeIdAlreadyExists,
                "Employee ID already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create faculty: {e}"),
                )),
            );
        }
    }

    match storage.create_faculty(faculty_data).await {
        Ok(faculty) => Ok(HttpResponse::Created().json(ApiResponse::success(
            faculty,
            "Faculty profile created successfully",
        ))),
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint failed") {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Faculty profile already exists for this user",
                )));
            }
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create faculty: {e}"),
                )),
            )
        }
    }
}
