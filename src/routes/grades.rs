use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::{GradeListParams, RecordGradeRequest, UpdateGradeRequest};
use crate::models::users::entities::UserRole;
use crate::services::GradeService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn record_grade(
    req: HttpRequest,
    grade_data: web::Json<RecordGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.record_grade(grade_data.into_inner(), &req).await
}

pub async fn list_grades(
    req: HttpRequest,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(query.into_inner(), &req).await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: SafeIDI64,
    update_data: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(grade_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn grade_summary(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.grade_summary(student_id.0, &req).await
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_grades)).route(
                    web::post()
                        .to(record_grade)
                        // 授课教师录入成绩，管理员可以代录
                        .wrap(middlewares::RequireRole::new_any(UserRole::faculty_roles())),
                ),
            )
            // 学生查自己的汇总，教师和管理员可查任意学生
            .service(
                web::resource("/students/{student_id}/summary")
                    .route(web::get().to(grade_summary)),
            )
            .service(
                web::resource("/{id}").route(
                    web::put()
                        .to(update_grade)
                        .wrap(middlewares::RequireRole::new_any(UserRole::faculty_roles())),
                ),
            ),
    );
}
