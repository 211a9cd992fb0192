use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{EnrollRequest, EnrollmentListParams};
use crate::services::EnrollmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

// HTTP处理程序
pub async fn enroll(
    req: HttpRequest,
    enroll_data: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.enroll(enroll_data.into_inner(), &req).await
}

pub async fn drop_enrollment(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.drop_enrollment(enrollment_id.0, &req).await
}

pub async fn list_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_enrollments(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireJWT)
            // 学生选自己的课，管理员可以代选；权限在服务层校验
            .route("", web::post().to(enroll))
            .route("", web::get().to(list_enrollments))
            .route("/{id}", web::delete().to(drop_enrollment)),
    );
}
