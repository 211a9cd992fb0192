pub mod list;
pub mod mark;
pub mod summary;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceListParams, MarkAttendanceRequest, UpdateAttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 批量标记一门课一天的考勤
    pub async fn mark_attendance(
        &self,
        mark_request: MarkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, mark_request, request).await
    }

    // 考勤记录列表
    pub async fn list_attendance(
        &self,
        query: AttendanceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, query, request).await
    }

    // 修改单条考勤
    pub async fn update_attendance(
        &self,
        attendance_id: i64,
        update_data: UpdateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attendance(self, attendance_id, update_data, request).await
    }

    // 学生考勤汇总
    pub async fn attendance_summary(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::attendance_summary(self, student_id, request).await
    }
}
