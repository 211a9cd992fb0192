use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::faculty::requests::{
    CreateFacultyRequest, FacultyListParams, UpdateFacultyRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FacultyService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FacultyService 实例
static FACULTY_SERVICE: Lazy<FacultyService> = Lazy::new(FacultyService::new_lazy);

// HTTP处理程序
pub async fn list_faculty(
    req: HttpRequest,
    query: web::Query<FacultyListParams>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.list_faculty(query.into_inner(), &req).await
}

pub async fn create_faculty(
    req: HttpRequest,
    faculty_data: web::Json<CreateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .create_faculty(faculty_data.into_inner(), &req)
        .await
}

pub async fn get_faculty(req: HttpRequest, faculty_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.get_faculty(faculty_id.0, &req).await
}

pub async fn update_faculty(
    req: HttpRequest,
    faculty_id: SafeIDI64,
    update_data: web::Json<UpdateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .update_faculty(faculty_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_faculty(req: HttpRequest, faculty_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.delete_faculty(faculty_id.0, &req).await
}

// 配置路由
pub fn configure_faculty_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/faculty")
            .wrap(middlewares::RequireJWT)
            .service(
                // 任何已登录角色都可以浏览教师列表
                web::resource("").route(web::get().to(list_faculty)).route(
                    web::post()
                        .to(create_faculty)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_faculty))
                    .route(
                        web::put()
                            .to(update_faculty)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_faculty)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
