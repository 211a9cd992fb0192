use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode, faculty::requests::UpdateFacultyRequest};

pub async fn update_faculty(
    service: &FacultyService,
    faculty_id: i64,
    update_data: UpdateFacultyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_faculty(faculty_id, update_data).await {
        Ok(Some(faculty)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            faculty,
            "Faculty updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update faculty: {e}"),
            )),
        ),
    }
}
