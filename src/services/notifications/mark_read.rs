use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, notifications::responses::MarkReadResponse};

pub async fn mark_read(
    service: &NotificationService,
    notification_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 只能操作自己的通知，其他人的当不存在处理
    match storage.mark_notification_read(user_id, notification_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MarkReadResponse { marked: 1 },
            "Notification marked as read",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to mark notification as read: {e}"),
            )),
        ),
    }
}

pub async fn mark_all_read(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    match storage.mark_all_notifications_read(user_id).await {
        Ok(marked) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MarkReadResponse {
                marked: marked as i64,
            },
            "All notifications marked as read",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to mark notifications as read: {e}"),
            )),
        ),
    }
}
