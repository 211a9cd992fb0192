//! 请求参数解析错误的统一处理
//!
//! 挂到 JsonConfig / QueryConfig 上，让反序列化失败也走标准响应格式。

use actix_web::error::InternalError;
use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

/// JSON body 解析失败
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("请求体解析失败: {detail}"),
    ));
    InternalError::from_response(err, response).into()
}

/// 查询字符串解析失败
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("查询参数解析失败: {detail}"),
    ));
    InternalError::from_response(err, response).into()
}
