use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_faculty(
    service: &FacultyService,
    faculty_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_faculty_by_id(faculty_id).await {
        Ok(Some(faculty)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            faculty,
            "Faculty retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve faculty: {e}"),
            )),
        ),
    }
}
