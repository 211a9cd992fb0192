use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::CreateStudentRequest,
    users::entities::UserRole,
};
use crate::utils::validate::{validate_roll_number, validate_semester};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_roll_number(&student_data.roll_number) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if let Err(msg) = validate_semester(student_data.semester) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    // 关联用户必须存在且是学生角色
    match storage.get_user_by_id(student_data.user_id).await {
        Ok(Some(user)) => {
            if user.role != UserRole::Student {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Linked user does not have the student role",
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
                    format!("Failed to create student: {e}"),
                )),
            );
        }
    }

    // 学号唯一性检查
    match storage
        .get_student_by_roll_number(&student_data.roll_number)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::RollNumberAlreadyExists,
                "Roll number already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create student: {e}"),
                )),
            );
        }
    }

    match storage.create_student(student_data).await {
        Ok(student) => Ok(HttpResponse::Created().json(ApiResponse::success(
            student,
            "Student profile created successfully",
        ))),
        Err(e) => {
            let msg = e.to_string();
            // 一个用户只能有一份学生档案
            if msg.contains("UNIQUE constraint failed") {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Student profile already exists for this user",
                )));
            }
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create student: {e}"),
                )),
            )
        }
    }
}
