pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::faculty::requests::{
    CreateFacultyRequest, FacultyListParams, UpdateFacultyRequest,
};
use crate::storage::Storage;

pub struct FacultyService {
    storage: Option<Arc<dyn Storage>>,
}

impl FacultyService {
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

    // 教职工档案列表
    pub async fn list_faculty(
        &self,
        query: FacultyListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_faculty(self, query, request).await
    }

    // 建立教职工档案
    pub async fn create_faculty(
        &self,
        faculty_data: CreateFacultyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_faculty(self, faculty_data, request).await
    }

    // 根据ID获取教职工档案
    pub async fn get_faculty(
        &self,
        faculty_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_faculty(self, faculty_id, request).await
    }

    // 更新教职工档案
    pub async fn update_faculty(
        &self,
        faculty_id: i64,
        update_data: UpdateFacultyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_faculty(self, faculty_id, update_data, request).await
    }

    // 删除教职工档案
    pub async fn delete_faculty(
        &self,
        faculty_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_faculty(self, faculty_id, request).await
    }
}
