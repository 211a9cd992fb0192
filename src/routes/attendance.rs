use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AttendanceListParams, MarkAttendanceRequest, UpdateAttendanceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn mark_attendance(
    req: HttpRequest,
    mark_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(mark_data.into_inner(), &req)
        .await
}

pub async fn list_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceListParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(query.into_inner(), &req)
        .await
}

pub async fn update_attendance(
    req: HttpRequest,
    attendance_id: SafeIDI64,
    update_data: web::Json<UpdateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_attendance(attendance_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn attendance_summary(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.attendance_summary(student_id.0, &req).await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_attendance))
                    .route(
                        web::post()
                            .to(mark_attendance)
                            // 授课教师批量点名，管理员可以代点
                            .wrap(middlewares::RequireRole::new_any(UserRole::faculty_roles())),
                    ),
            )
            // 学生查自己的汇总，教师和管理员可查任意学生
            .service(
                web::resource("/students/{student_id}/summary")
                    .route(web::get().to(attendance_summary)),
            )
            .service(
                web::resource("/{id}").route(
                    web::put()
                        .to(update_attendance)
                        .wrap(middlewares::RequireRole::new_any(UserRole::faculty_roles())),
                ),
            ),
    );
}
