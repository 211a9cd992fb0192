pub mod create;
pub mod get;
pub mod list;
pub mod pay;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fees::requests::{CreateFeeRequest, FeeListParams, PayFeeRequest};
use crate::storage::Storage;

pub struct FeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeService {
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

    // 开具缴费单
    pub async fn create_fee(
        &self,
        fee_data: CreateFeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_fee(self, fee_data, request).await
    }

    // 缴费
    pub async fn pay_fee(
        &self,
        fee_id: i64,
        payment: PayFeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pay::pay_fee(self, fee_id, payment, request).await
    }

    // 缴费单详情
    pub async fn get_fee(&self, fee_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_fee(self, fee_id, request).await
    }

    // 学生缴费汇总
    pub async fn fee_summary(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::fee_summary(self, student_id, request).await
    }

    // 缴费单列表
    pub async fn list_fees(
        &self,
        query: FeeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_fees(self, query, request).await
    }
}
