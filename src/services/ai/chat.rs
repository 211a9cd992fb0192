use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AiService;
use super::providers;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    ai::{requests::ChatRequest, responses::ChatResponse},
};

// 上游不可用时的兜底文案
const CHAT_FALLBACK: &str =
    "AI 助手暂时不可用，请稍后再试。如需帮助请联系教务处或查阅学生手册。";

pub async fn chat(
    service: &AiService,
    chat_data: ChatRequest,
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

    if chat_data.message.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Message must not be empty",
        )));
    }

    let provider_name = super::provider_name(&chat_data.provider);
    let provider = match providers::resolve(&provider_name) {
        Ok(provider) => provider,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Unknown AI provider: {provider_name}"),
            )));
        }
    };

    // 上游失败退回兜底文案，接口仍返回 200
    let (reply, fallback) = match provider.complete(&chat_data.message).await {
        Ok(reply) => (reply, false),
        Err(e) => {
            tracing::warn!("AI provider {} unavailable: {}", provider_name, e);
            (CHAT_FALLBACK.to_string(), true)
        }
    };

    if let Err(e) = storage
        .insert_chat_message(user_id, &provider_name, &chat_data.message, &reply, fallback)
        .await
    {
        tracing::warn!("Failed to persist chat message: {}", e);
    }

    let response = ChatResponse {
        reply,
        provider: provider_name,
        fallback,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Chat completed successfully")))
}
