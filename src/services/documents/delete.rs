use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::fs;

use super::DocumentService;
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, users::entities::UserRole};

pub async fn delete_document(
    service: &DocumentService,
    document_id: i64,
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

    let document = match storage.get_document_by_id(document_id).await {
        Ok(Some(document)) => document,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::DocumentNotFound,
                "Document not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete document: {e}"),
                )),
            );
        }
    };

    // 本人或管理员才能删除
    if document.owner_id != user.id && user.role != UserRole::Admin {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only delete your own documents",
        )));
    }

    match storage.delete_document(document_id).await {
        Ok(true) => {
            // 连同磁盘文件一起清理
            let config = AppConfig::get();
            let file_path = format!("{}/{}.bin", config.upload.dir, document.file_token);
            if let Err(e) = fs::remove_file(&file_path) {
                tracing::warn!("Failed to remove stored file {}: {}", file_path, e);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Document deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DocumentNotFound,
            "Document not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete document: {e}"),
            )),
        ),
    }
}
