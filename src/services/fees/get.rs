use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    fees::responses::{FeeResponse, FeeView},
    users::entities::UserRole,
};

pub async fn get_fee(
    service: &FeeService,
    fee_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let fee = match storage.get_fee_by_id(fee_id).await {
        Ok(Some(fee)) => fee,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FeeNotFound,
                "Fee not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve fee: {e}"),
                )),
            );
        }
    };

    // 学生只能看自己的缴费单
    if user.role == UserRole::Student {
        match storage.get_student_by_user_id(user.id).await {
            Ok(Some(own)) if own.id == fee.student_id => {}
            Ok(_) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Students can only view their own fees",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to retrieve fee: {e}"),
                    )),
                );
            }
        }
    }

    let overdue = fee.is_overdue(chrono::Utc::now());
    let response = FeeResponse {
        fee: FeeView { fee, overdue },
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Fee retrieved successfully")))
}
