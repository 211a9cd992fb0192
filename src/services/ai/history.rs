use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AiService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, ai::requests::ChatHistoryParams};

pub async fn chat_history(
    service: &AiService,
    query: ChatHistoryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只能看自己的对话记录
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    match storage
        .list_chat_history_with_pagination(user_id, query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Chat history retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve chat history: {e}"),
            )),
        ),
    }
}
