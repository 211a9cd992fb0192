use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, rt, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::models::{ApiResponse, ErrorCode};
use crate::services::realtime::RealtimeService;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    /// 访问令牌，浏览器 WebSocket 无法带 Authorization 头
    pub token: String,
}

// WebSocket 升级入口
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    query: web::Query<WsQuery>,
) -> ActixResult<HttpResponse> {
    let claims = match JwtUtils::verify_access_token(&query.token) {
        Ok(claims) => claims,
        Err(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Invalid or expired token",
            )));
        }
    };

    let user_id: i64 = match claims.sub.parse() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Invalid token subject",
            )));
        }
    };

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to establish connection: {e}"),
                )),
            );
        }
    };

    // 课程房间成员资格在连接时解析一次
    let course_ids = match storage.course_ids_for_user(user.id).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!("Failed to resolve course rooms for user {}: {}", user.id, e);
            Vec::new()
        }
    };

    let (response, session, msg_stream) = actix_ws::handle(&req, stream)?;

    rt::spawn(RealtimeService::handle_connection(
        user.id, user.role, course_ids, session, msg_stream,
    ));

    Ok(response)
}

// 配置路由
pub fn configure_ws_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/ws", web::get().to(ws_connect));
}
