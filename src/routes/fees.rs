use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::fees::requests::{CreateFeeRequest, FeeListParams, PayFeeRequest};
use crate::models::users::entities::UserRole;
use crate::services::FeeService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 FeeService 实例
static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

// HTTP处理程序
pub async fn create_fee(
    req: HttpRequest,
    fee_data: web::Json<CreateFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.create_fee(fee_data.into_inner(), &req).await
}

pub async fn pay_fee(
    req: HttpRequest,
    fee_id: SafeIDI64,
    payment: web::Json<PayFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.pay_fee(fee_id.0, payment.into_inner(), &req).await
}

pub async fn get_fee(req: HttpRequest, fee_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.get_fee(fee_id.0, &req).await
}

pub async fn list_fees(
    req: HttpRequest,
    query: web::Query<FeeListParams>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_fees(query.into_inner(), &req).await
}

pub async fn fee_summary(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.fee_summary(student_id.0, &req).await
}

// 配置路由
pub fn configure_fee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fees")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_fees)).route(
                    web::post()
                        .to(create_fee)
                        // 只有管理员能开具缴费单
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            // 学生查自己的余额汇总
            .service(
                web::resource("/students/{student_id}/summary")
                    .route(web::get().to(fee_summary)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_fee)),
            )
            // 缴费本人或管理员，服务层校验归属
            .service(web::resource("/{id}/payments").route(web::post().to(pay_fee))),
    );
}
