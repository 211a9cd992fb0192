use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocumentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, documents::requests::DocumentListParams, users::entities::UserRole,
};

pub async fn list_documents(
    service: &DocumentService,
    mut query: DocumentListParams,
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

    // 学生只能看自己的文档
    if user.role == UserRole::Student {
        query.owner_id = Some(user.id);
    }

    match storage.list_documents_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Document list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve documents: {e}"),
            )),
        ),
    }
}
