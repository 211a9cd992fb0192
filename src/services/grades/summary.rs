use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::{entities::letter_grade, responses::GradeSummaryResponse},
    users::entities::UserRole,
};

pub async fn grade_summary(
    service: &GradeService,
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
                    "Students can only view their own grade summary",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to retrieve grade summary: {e}"),
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
                    format!("Failed to retrieve grade summary: {e}"),
                )),
            );
        }
    }

    match storage.grade_summary(student_id).await {
        Ok(courses) => {
            // 按成绩条数加权求总得分率
            let total_count: i64 = courses.iter().map(|c| c.grade_count).sum();
            let overall_percentage = if total_count > 0 {
                let weighted: f64 = courses
                    .iter()
                    .map(|c| c.average_percentage * c.grade_count as f64)
                    .sum();
                (weighted / total_count as f64 * 100.0).round() / 100.0
            } else {
                0.0
            };

            let response = GradeSummaryResponse {
                student_id,
                overall_letter_grade: letter_grade(overall_percentage).to_string(),
                overall_percentage,
                courses,
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Grade summary retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve grade summary: {e}"),
            )),
        ),
    }
}
