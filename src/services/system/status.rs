use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, AppStartTime, ErrorCode,
    system::responses::{EntityCounts, SystemStatusResponse},
};
use crate::services::realtime;

pub async fn status(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| (chrono::Utc::now() - start.start_datetime).num_seconds())
        .unwrap_or(0);

    let counts = match storage.entity_counts().await {
        Ok(snapshot) => EntityCounts {
            users: snapshot.users as i64,
            students: snapshot.students as i64,
            faculty: snapshot.faculty as i64,
            courses: snapshot.courses as i64,
            enrollments: snapshot.enrollments as i64,
        },
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve system status: {e}"),
                )),
            );
        }
    };

    let response = SystemStatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_seconds,
        online_users: realtime::get_online_count(),
        counts,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "System status retrieved successfully",
    )))
}
