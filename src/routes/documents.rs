use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::documents::requests::DocumentListParams;
use crate::services::DocumentService;
use crate::utils::{SafeFileToken, SafeIDI64};

// 懒加载的全局 DocumentService 实例
static DOCUMENT_SERVICE: Lazy<DocumentService> = Lazy::new(DocumentService::new_lazy);

// HTTP处理程序
pub async fn upload_document(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.upload_document(&req, payload).await
}

pub async fn download_document(
    req: HttpRequest,
    token: SafeFileToken,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.download_document(token.0, &req).await
}

pub async fn list_documents(
    req: HttpRequest,
    query: web::Query<DocumentListParams>,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.list_documents(query.into_inner(), &req).await
}

pub async fn delete_document(
    req: HttpRequest,
    document_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.delete_document(document_id.0, &req).await
}

// 配置路由
pub fn configure_document_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/documents")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_documents))
                    .route(
                        web::post()
                            .to(upload_document)
                            .wrap(middlewares::RateLimit::file_upload()),
                    ),
            )
            .service(
                web::resource("/{token}/download").route(web::get().to(download_document)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_document))),
    );
}
