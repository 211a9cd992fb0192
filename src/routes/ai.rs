use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ai::requests::{ChatHistoryParams, ChatRequest, InsightListParams, InsightRequest};
use crate::models::users::entities::UserRole;
use crate::services::AiService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 AiService 实例
static AI_SERVICE: Lazy<AiService> = Lazy::new(AiService::new_lazy);

// HTTP处理程序
pub async fn chat(req: HttpRequest, chat_data: web::Json<ChatRequest>) -> ActixResult<HttpResponse> {
    AI_SERVICE.chat(chat_data.into_inner(), &req).await
}

pub async fn chat_history(
    req: HttpRequest,
    query: web::Query<ChatHistoryParams>,
) -> ActixResult<HttpResponse> {
    AI_SERVICE.chat_history(query.into_inner(), &req).await
}

pub async fn generate_insight(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    insight_data: web::Json<InsightRequest>,
) -> ActixResult<HttpResponse> {
    let mut insight_data = insight_data.into_inner();
    // 路径参数优先于请求体
    insight_data.student_id = student_id.0;
    AI_SERVICE.generate_insight(insight_data, &req).await
}

pub async fn list_insights(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<InsightListParams>,
) -> ActixResult<HttpResponse> {
    AI_SERVICE
        .list_insights(student_id.0, query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_ai_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/ai")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/chat")
                    .route(web::post().to(chat).wrap(middlewares::RateLimit::ai_chat())),
            )
            .service(web::resource("/chat/history").route(web::get().to(chat_history)))
            .service(
                web::resource("/insights/students/{student_id}")
                    .route(
                        web::post()
                            .to(generate_insight)
                            // 学情分析只对教师和管理员开放
                            .wrap(middlewares::RateLimit::ai_chat())
                            .wrap(middlewares::RequireRole::new_any(UserRole::faculty_roles())),
                    )
                    .route(
                        web::get()
                            .to(list_insights)
                            .wrap(middlewares::RequireRole::new_any(UserRole::faculty_roles())),
                    ),
            ),
    );
}
