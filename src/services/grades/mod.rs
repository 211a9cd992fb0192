pub mod list;
pub mod record;
pub mod summary;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::{GradeListParams, RecordGradeRequest, UpdateGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    // 录入成绩
    pub async fn record_grade(
        &self,
        grade_data: RecordGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_grade(self, grade_data, request).await
    }

    // 修改成绩
    pub async fn update_grade(
        &self,
        grade_id: i64,
        update_data: UpdateGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(self, grade_id, update_data, request).await
    }

    // 成绩列表
    pub async fn list_grades(
        &self,
        query: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, query, request).await
    }

    // 学生成绩汇总
    pub async fn grade_summary(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::grade_summary(self, student_id, request).await
    }
}
