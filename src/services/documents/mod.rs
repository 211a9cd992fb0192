pub mod delete;
pub mod download;
pub mod list;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::documents::requests::DocumentListParams;
use crate::storage::Storage;

pub struct DocumentService {
    storage: Option<Arc<dyn Storage>>,
}

impl DocumentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 上传文档
    pub async fn upload_document(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(self, request, payload).await
    }

    // 按令牌下载
    pub async fn download_document(
        &self,
        file_token: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        download::handle_download(self, request, file_token).await
    }

    // 文档列表
    pub async fn list_documents(
        &self,
        query: DocumentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_documents(self, query, request).await
    }

    // 删除文档
    pub async fn delete_document(
        &self,
        document_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_document(self, document_id, request).await
    }
}
